//! Span constructors for claim handling.
//!
//! Keeping span names and fields in one place makes claim traces easy to
//! filter and correlate.

use geoclaim_types::{ClaimantId, TargetId};
use tracing::{info_span, Span};

/// Span covering one privileged claim, from resolution to execution.
pub fn claim_span(target: &TargetId, claimant: &ClaimantId) -> Span {
    info_span!("claim", target = %target, claimant = %claimant)
}

/// Span covering one advisory eligibility check.
pub fn advise_span(target: &TargetId) -> Span {
    info_span!("advise", target = %target)
}
