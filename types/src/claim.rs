//! Claim targets, requests, verdicts and receipts.

use crate::coordinate::Coordinate;
use crate::id::{ClaimantId, TargetId};
use crate::unit::Radius;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered collectible pinned to a place.
///
/// Created once by the registry and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimTarget {
    pub id: TargetId,
    pub position: Coordinate,
    pub radius: Radius,
}

impl ClaimTarget {
    pub fn new(id: TargetId, position: Coordinate, radius: Radius) -> Self {
        Self {
            id,
            position,
            radius,
        }
    }
}

/// A single claim attempt. Built per request and dropped once it resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimRequest {
    pub target_id: TargetId,
    pub claimant: ClaimantId,
    /// The claimant's position as supplied in this very request.
    pub position: Coordinate,
}

/// Categories of claim failure, as reported to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimErrorKind {
    /// Latitude or longitude outside the valid range.
    InvalidCoordinate,
    /// The request itself is malformed (e.g. an empty id).
    InvalidRequest,
    /// The registry has no target with that id.
    TargetNotFound,
    /// Evaluation succeeded and the claimant is too far away.
    OutOfRange,
    /// Eligibility was confirmed but the downstream action failed.
    ExecutionFailed,
}

impl ClaimErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCoordinate => "invalid_coordinate",
            Self::InvalidRequest => "invalid_request",
            Self::TargetNotFound => "target_not_found",
            Self::OutOfRange => "out_of_range",
            Self::ExecutionFailed => "execution_failed",
        }
    }
}

impl fmt::Display for ClaimErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one eligibility evaluation.
///
/// `reason` is only set when the evaluation itself could not run; an
/// out-of-range claimant gets `eligible: false` with no reason.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub eligible: bool,
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ClaimErrorKind>,
}

impl Verdict {
    pub fn within(distance_km: f64, radius: Radius) -> Self {
        Self {
            eligible: distance_km <= radius.km(),
            distance_km,
            reason: None,
        }
    }

    pub fn rejected(reason: ClaimErrorKind) -> Self {
        Self {
            eligible: false,
            distance_km: 0.0,
            reason: Some(reason),
        }
    }
}

/// Proof that the downstream action ran for a claimant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub target_id: TargetId,
    pub claimant: ClaimantId,
    /// Executor-specific reference (transaction hash, job id, ...).
    pub reference: String,
}
