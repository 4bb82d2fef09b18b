//! Immutable in-memory target registry.

use crate::error::RegistryError;
use crate::resolver::TargetResolver;
use geoclaim_types::{ClaimTarget, TargetId};
use std::collections::BTreeMap;

/// A fixed set of claim targets, validated once at construction.
///
/// Every target's position satisfies the coordinate invariant and ids are
/// unique, so lookups never hand the gate a malformed target.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    targets: BTreeMap<TargetId, ClaimTarget>,
}

impl TargetRegistry {
    pub fn new(targets: impl IntoIterator<Item = ClaimTarget>) -> Result<Self, RegistryError> {
        let mut map = BTreeMap::new();
        for target in targets {
            if !target.id.is_valid() {
                return Err(RegistryError::EmptyTargetId);
            }
            if let Err(source) = target.position.validated() {
                return Err(RegistryError::InvalidTarget {
                    id: target.id.to_string(),
                    source,
                });
            }
            if map.contains_key(&target.id) {
                return Err(RegistryError::DuplicateTarget(target.id.to_string()));
            }
            map.insert(target.id.clone(), target);
        }
        Ok(Self { targets: map })
    }

    pub fn get(&self, id: &TargetId) -> Option<&ClaimTarget> {
        self.targets.get(id)
    }

    /// Targets in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ClaimTarget> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl TargetResolver for TargetRegistry {
    fn resolve(&self, id: &TargetId) -> Option<ClaimTarget> {
        self.get(id).cloned()
    }
}
