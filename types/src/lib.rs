//! Fundamental types for geofenced claims.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: coordinates, distance units and radii, target and claimant
//! identifiers, claim requests, verdicts, and receipts.

pub mod claim;
pub mod coordinate;
pub mod error;
pub mod id;
pub mod unit;

pub use claim::{ClaimErrorKind, ClaimRequest, ClaimTarget, Receipt, Verdict};
pub use coordinate::Coordinate;
pub use error::GeoError;
pub use id::{ClaimantId, TargetId};
pub use unit::{DistanceUnit, Radius, KM_PER_MILE};
