//! The privileged downstream action (e.g. minting or transferring a token).

use crate::error::ExecutionError;
use geoclaim_types::{ClaimantId, Receipt, TargetId};
use std::future::Future;

/// Performs the real-world effect of a granted claim.
///
/// Only ever invoked by [`crate::ClaimAuthority`] after the gate has confirmed
/// eligibility on the privileged boundary. Implementations own retries and
/// double-claim prevention; the authority never retries on its own.
pub trait ClaimExecutor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn execute(
        &self,
        target: &TargetId,
        claimant: &ClaimantId,
    ) -> impl Future<Output = Result<Receipt, ExecutionError>> + Send;
}
