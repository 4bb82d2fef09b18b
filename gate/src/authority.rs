//! The privileged claim boundary.
//!
//! Every effectful claim goes through [`ClaimAuthority::claim`]:
//! 1. Validate the request shape and the claimant position (fail fast).
//! 2. Resolve the target from the registry.
//! 3. Re-run [`ClaimGate::evaluate`] on the position carried by *this*
//!    request. Whatever the client believed about its own eligibility is
//!    never consulted.
//! 4. Only an eligible verdict reaches the [`ClaimExecutor`].

use crate::error::ClaimError;
use crate::executor::ClaimExecutor;
use crate::gate::ClaimGate;
use crate::resolver::TargetResolver;
use crate::spans::{advise_span, claim_span};
use geoclaim_types::{ClaimRequest, ClaimTarget, Coordinate, Receipt, TargetId, Verdict};
use tracing::{debug, info, warn, Instrument};

/// Result of a granted and executed claim.
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimOutcome {
    pub receipt: Receipt,
    pub verdict: Verdict,
}

/// Owns the resolver and executor and enforces the gate in front of them.
pub struct ClaimAuthority<R, E> {
    gate: ClaimGate,
    resolver: R,
    executor: E,
}

impl<R: TargetResolver, E: ClaimExecutor> ClaimAuthority<R, E> {
    pub fn new(resolver: R, executor: E) -> Self {
        Self {
            gate: ClaimGate,
            resolver,
            executor,
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Advisory check: resolve the target and evaluate without side effects.
    ///
    /// An invalid position is not an error here; it comes back as an
    /// ineligible verdict carrying `ClaimErrorKind::InvalidCoordinate`.
    /// The target is resolved first because that verdict is reported against
    /// it, so an unknown target wins over a bad position. [`Self::authorize`]
    /// rejects bad positions before lookup instead.
    pub fn advise(
        &self,
        target_id: &TargetId,
        position: &Coordinate,
    ) -> Result<(ClaimTarget, Verdict), ClaimError> {
        let _span = advise_span(target_id).entered();
        let target = self.resolve(target_id)?;
        let verdict = self.gate.evaluate(position, &target);
        debug!(eligible = verdict.eligible, distance_km = verdict.distance_km, "advisory verdict");
        Ok((target, verdict))
    }

    /// Check the request against the gate without executing anything.
    ///
    /// Returns the resolved target and the (eligible) verdict on success.
    pub fn authorize(&self, request: &ClaimRequest) -> Result<(ClaimTarget, Verdict), ClaimError> {
        if !request.target_id.is_valid() {
            return Err(ClaimError::InvalidRequest("empty target id".into()));
        }
        if !request.claimant.is_valid() {
            return Err(ClaimError::InvalidRequest("empty claimant".into()));
        }
        if !request.position.is_valid() {
            return Err(ClaimError::InvalidCoordinate);
        }

        let target = self.resolve(&request.target_id)?;
        let verdict = self.gate.evaluate(&request.position, &target);

        // The gate only sets a reason for invalid coordinates.
        if verdict.reason.is_some() {
            return Err(ClaimError::InvalidCoordinate);
        }

        if !verdict.eligible {
            return Err(ClaimError::OutOfRange {
                distance_km: verdict.distance_km,
                radius_km: target.radius.km(),
            });
        }
        Ok((target, verdict))
    }

    /// Authorize the request and, if eligible, run the privileged action.
    pub async fn claim(&self, request: &ClaimRequest) -> Result<ClaimOutcome, ClaimError> {
        let span = claim_span(&request.target_id, &request.claimant);
        async {
            let (target, verdict) = match self.authorize(request) {
                Ok(granted) => granted,
                Err(e) => {
                    info!(kind = %e.kind(), "claim rejected: {e}");
                    return Err(e);
                }
            };

            debug!(executor = self.executor.name(), distance_km = verdict.distance_km, "claim eligible, executing");
            match self.executor.execute(&target.id, &request.claimant).await {
                Ok(receipt) => {
                    info!(reference = %receipt.reference, distance_km = verdict.distance_km, "claim granted");
                    Ok(ClaimOutcome { receipt, verdict })
                }
                Err(e) => {
                    warn!(executor = self.executor.name(), "claim execution failed: {e}");
                    Err(ClaimError::ExecutionFailed(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    fn resolve(&self, id: &TargetId) -> Result<ClaimTarget, ClaimError> {
        self.resolver
            .resolve(id)
            .ok_or_else(|| ClaimError::TargetNotFound(id.to_string()))
    }
}
