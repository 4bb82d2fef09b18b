//! The eligibility decision.

use geoclaim_geo::distance_km;
use geoclaim_types::{ClaimErrorKind, ClaimTarget, Coordinate, Verdict};
use tracing::debug;

/// Decides whether a claimant position lies inside a target's geofence.
///
/// Stateless and side-effect free: it may be called any number of times, from
/// an untrusted advisory context or from the privileged boundary, and only
/// ever returns a fresh [`Verdict`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ClaimGate;

impl ClaimGate {
    /// Evaluate one claimant position against one target.
    ///
    /// Fails closed: if either coordinate is out of range (or not finite) the
    /// verdict is ineligible with [`ClaimErrorKind::InvalidCoordinate`] and no
    /// distance is computed. Otherwise `eligible` is `distance <= radius`, with
    /// the boundary itself counting as inside.
    pub fn evaluate(&self, claimant: &Coordinate, target: &ClaimTarget) -> Verdict {
        if !claimant.is_valid() || !target.position.is_valid() {
            debug!(target = %target.id, "rejecting evaluation with invalid coordinates");
            return Verdict::rejected(ClaimErrorKind::InvalidCoordinate);
        }

        let d = distance_km(claimant, &target.position);
        let verdict = Verdict::within(d, target.radius);
        debug!(
            target = %target.id,
            distance_km = d,
            radius_km = target.radius.km(),
            eligible = verdict.eligible,
            "evaluated claim eligibility"
        );
        verdict
    }
}
