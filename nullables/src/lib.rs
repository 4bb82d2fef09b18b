//! Nullable infrastructure for deterministic testing.
//!
//! External collaborators of the claim flow are abstracted behind traits in
//! `geoclaim-gate`. This crate provides test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod executor;

pub use executor::{ExecutorCall, NullExecutor};
