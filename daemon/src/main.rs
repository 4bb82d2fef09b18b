//! geoclaim daemon — entry point for the geofenced claim service.

mod config;
mod executor;
mod shutdown;

use anyhow::{bail, Context};
use clap::Parser;
use config::ServiceConfig;
use executor::HttpClaimExecutor;
use geoclaim_gate::{ClaimAuthority, ClaimGate};
use geoclaim_rpc::{RpcServer, RpcState};
use geoclaim_types::{Coordinate, DistanceUnit, TargetId};
use geoclaim_utils::LogFormat;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "geoclaim-daemon", about = "Geofenced collectible claim service")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "GEOCLAIM_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "GEOCLAIM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "GEOCLAIM_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the claim HTTP server.
    Serve {
        /// Address to bind.
        #[arg(long, env = "GEOCLAIM_BIND_ADDRESS")]
        bind: Option<String>,

        /// HTTP port.
        #[arg(long, env = "GEOCLAIM_PORT")]
        port: Option<u16>,

        /// Mint service URL invoked for granted claims.
        #[arg(long, env = "GEOCLAIM_MINT_ENDPOINT")]
        mint_endpoint: Option<String>,

        /// Allow cross-origin browser clients.
        #[arg(
            long,
            env = "GEOCLAIM_ENABLE_CORS",
            value_parser = clap::builder::FalseyValueParser::new()
        )]
        cors: bool,
    },

    /// Print the great-circle distance between two points.
    Distance {
        /// First point as LAT,LNG.
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,

        /// Second point as LAT,LNG.
        #[arg(long, allow_hyphen_values = true)]
        to: Coordinate,

        /// Report miles instead of kilometers.
        #[arg(long)]
        miles: bool,
    },

    /// Evaluate a position against a configured target (advisory only).
    Check {
        /// Target id from the configuration.
        #[arg(long)]
        target: String,

        /// Claimant position as LAT,LNG.
        #[arg(long, allow_hyphen_values = true)]
        at: Coordinate,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => ServiceConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    geoclaim_utils::init_logging(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Serve {
            bind,
            port,
            mint_endpoint,
            cors,
        } => {
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if mint_endpoint.is_some() {
                config.mint_endpoint = mint_endpoint;
            }
            config.enable_cors |= cors;
            serve(config).await?;
        }
        Command::Distance { from, to, miles } => {
            let unit = if miles {
                DistanceUnit::Miles
            } else {
                DistanceUnit::Kilometers
            };
            let d = geoclaim_geo::distance(&from, &to, unit);
            println!("{d:.4} {unit}");
        }
        Command::Check { target, at } => {
            let registry = config.registry().context("building target registry")?;
            let Some(target) = registry.get(&TargetId::new(target.as_str())) else {
                bail!("target not found: {target}");
            };
            let verdict = ClaimGate.evaluate(&at, target);
            let report = serde_json::json!({
                "target_id": target.id,
                "radius_km": target.radius.km(),
                "distance_miles": DistanceUnit::Miles.from_km(verdict.distance_km),
                "verdict": verdict,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

async fn serve(config: ServiceConfig) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;
    let Some(endpoint) = config.mint_endpoint.clone() else {
        bail!("no mint endpoint configured (set mint_endpoint or --mint-endpoint)");
    };

    let registry = config.registry()?;
    if registry.is_empty() {
        tracing::warn!("no targets configured; every claim will be rejected as not found");
    }
    let executor =
        HttpClaimExecutor::new(endpoint, Duration::from_secs(config.mint_timeout_secs))?;

    tracing::info!(
        "Starting claim service on {}:{} ({} targets, mint endpoint {})",
        config.bind_address,
        config.port,
        registry.len(),
        executor.endpoint(),
    );

    let state = Arc::new(RpcState::new(ClaimAuthority::new(registry, executor)));
    let server = RpcServer::new(config.bind_address.clone(), config.port).with_cors(config.enable_cors);
    server.start(state, shutdown::shutdown_signal()).await?;

    tracing::info!("geoclaim daemon exited cleanly");
    Ok(())
}
