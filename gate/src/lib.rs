//! Geofenced claim verification.
//!
//! Two layers:
//! 1. **[`ClaimGate`]**: the pure eligibility decision. Given a claimant
//!    position and a target, is the claimant inside the geofence?
//! 2. **[`ClaimAuthority`]**: the privileged boundary. Resolves the target,
//!    re-runs the gate on the position carried by the privileged request, and
//!    only then invokes the downstream [`ClaimExecutor`].
//!
//! The advisory path (a UI deciding whether to enable a claim button) and the
//! privileged path share the same `ClaimGate`, so the two can never disagree
//! on the formula, the radius or the unit.

pub mod authority;
pub mod error;
pub mod executor;
pub mod gate;
pub mod registry;
pub mod resolver;
pub mod spans;

pub use authority::{ClaimAuthority, ClaimOutcome};
pub use error::{ClaimError, ExecutionError, RegistryError};
pub use executor::ClaimExecutor;
pub use gate::ClaimGate;
pub use registry::TargetRegistry;
pub use resolver::TargetResolver;
