//! The frozen profile registry.
//!
//! Populated during the startup configuration phase, read-only afterwards.
//! Registration and execution never overlap, so a completed registry is
//! shareable across threads without locking.

use std::collections::BTreeMap;

use tracing::debug;

use hrmap_model::ShapeName;

use crate::error::MapError;
use crate::rules::MappingProfile;

#[derive(Debug, Clone, Default)]
pub struct MappingRegistry {
    profiles: BTreeMap<(ShapeName, ShapeName), MappingProfile>,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile. A second profile for the same pair is a
    /// configuration error, never a silent override.
    pub fn register(&mut self, profile: MappingProfile) -> Result<(), MapError> {
        let key = (profile.source().clone(), profile.dest().clone());
        if self.profiles.contains_key(&key) {
            return Err(MapError::DuplicateMapping {
                src: key.0,
                dest: key.1,
            });
        }
        debug!(
            source = %profile.source(),
            dest = %profile.dest(),
            rules = profile.rules().len(),
            "mapping registered"
        );
        self.profiles.insert(key, profile);
        Ok(())
    }

    pub fn lookup(&self, source: &ShapeName, dest: &ShapeName) -> Result<&MappingProfile, MapError> {
        self.profiles
            .get(&(source.clone(), dest.clone()))
            .ok_or_else(|| MapError::UnregisteredMapping {
                src: source.clone(),
                dest: dest.clone(),
            })
    }

    pub fn contains(&self, source: &ShapeName, dest: &ShapeName) -> bool {
        self.profiles
            .contains_key(&(source.clone(), dest.clone()))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingProfile> {
        self.profiles.values()
    }
}
