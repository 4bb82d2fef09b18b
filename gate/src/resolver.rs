//! Lookup of registered claim targets.

use geoclaim_types::{ClaimTarget, TargetId};
use std::sync::Arc;

/// Resolves a target id to its registered position and radius.
///
/// Implemented by whatever registry owns the collectibles. Returning `None`
/// means the id is unknown.
pub trait TargetResolver: Send + Sync {
    fn resolve(&self, id: &TargetId) -> Option<ClaimTarget>;
}

impl<T: TargetResolver + ?Sized> TargetResolver for Arc<T> {
    fn resolve(&self, id: &TargetId) -> Option<ClaimTarget> {
        (**self).resolve(id)
    }
}
