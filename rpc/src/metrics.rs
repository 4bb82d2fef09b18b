//! Prometheus metrics for claim handling.
//!
//! [`ClaimMetrics`] owns a dedicated [`Registry`] that the `/metrics`
//! endpoint encodes into the Prometheus text exposition format.

use geoclaim_gate::ClaimError;
use prometheus::{
    register_histogram_with_registry, register_int_counter_with_registry, Encoder, Histogram,
    HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
};

pub struct ClaimMetrics {
    pub registry: Registry,

    // ── Counters ────────────────────────────────────────────────────────
    /// Advisory eligibility checks answered.
    pub evaluations: IntCounter,
    /// Claims that passed the gate and were executed.
    pub claims_granted: IntCounter,
    /// Claims rejected because the claimant was outside the geofence.
    pub claims_out_of_range: IntCounter,
    /// Claims rejected for malformed input (coordinates or request shape).
    pub claims_invalid: IntCounter,
    /// Claims naming an unknown target.
    pub claims_not_found: IntCounter,
    /// Claims whose downstream execution failed.
    pub claims_failed: IntCounter,

    // ── Histograms ──────────────────────────────────────────────────────
    /// Claimant-to-target distance of evaluated claims, in kilometers.
    pub claim_distance_km: Histogram,
}

impl ClaimMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let evaluations = register_int_counter_with_registry!(
            Opts::new(
                "geoclaim_evaluations_total",
                "Advisory eligibility checks answered"
            ),
            registry
        )
        .expect("failed to register evaluations counter");

        let claims_granted = register_int_counter_with_registry!(
            Opts::new(
                "geoclaim_claims_granted_total",
                "Claims that passed the geofence and were executed"
            ),
            registry
        )
        .expect("failed to register claims_granted counter");

        let claims_out_of_range = register_int_counter_with_registry!(
            Opts::new(
                "geoclaim_claims_out_of_range_total",
                "Claims rejected because the claimant was outside the geofence"
            ),
            registry
        )
        .expect("failed to register claims_out_of_range counter");

        let claims_invalid = register_int_counter_with_registry!(
            Opts::new(
                "geoclaim_claims_invalid_total",
                "Claims rejected for malformed coordinates or requests"
            ),
            registry
        )
        .expect("failed to register claims_invalid counter");

        let claims_not_found = register_int_counter_with_registry!(
            Opts::new(
                "geoclaim_claims_not_found_total",
                "Claims naming an unknown target"
            ),
            registry
        )
        .expect("failed to register claims_not_found counter");

        let claims_failed = register_int_counter_with_registry!(
            Opts::new(
                "geoclaim_claims_failed_total",
                "Claims whose downstream execution failed"
            ),
            registry
        )
        .expect("failed to register claims_failed counter");

        let claim_distance_km = register_histogram_with_registry!(
            HistogramOpts::new(
                "geoclaim_claim_distance_km",
                "Claimant to target distance of evaluated claims"
            )
            .buckets(vec![0.01, 0.05, 0.1, 0.16, 0.25, 0.5, 1.0, 5.0, 25.0, 100.0]),
            registry
        )
        .expect("failed to register claim_distance_km histogram");

        Self {
            registry,
            evaluations,
            claims_granted,
            claims_out_of_range,
            claims_invalid,
            claims_not_found,
            claims_failed,
            claim_distance_km,
        }
    }

    /// Count a granted claim.
    pub fn record_granted(&self, distance_km: f64) {
        self.claims_granted.inc();
        self.claim_distance_km.observe(distance_km);
    }

    /// Count a rejected claim under the counter matching its kind.
    pub fn record_rejected(&self, err: &ClaimError) {
        match err {
            ClaimError::InvalidCoordinate | ClaimError::InvalidRequest(_) => {
                self.claims_invalid.inc()
            }
            ClaimError::TargetNotFound(_) => self.claims_not_found.inc(),
            ClaimError::OutOfRange { distance_km, .. } => {
                self.claims_out_of_range.inc();
                self.claim_distance_km.observe(*distance_km);
            }
            ClaimError::ExecutionFailed(_) => self.claims_failed.inc(),
        }
    }

    /// Encode every metric in the Prometheus text format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl Default for ClaimMetrics {
    fn default() -> Self {
        Self::new()
    }
}
