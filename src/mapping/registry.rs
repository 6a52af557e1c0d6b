//! Registry of mapping configurations keyed by (source, destination) type

use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;

use super::configuration::MappingConfiguration;
use crate::error::{MapperError, Result};
use crate::model::TypeDescriptor;

type TypePair = (TypeDescriptor, TypeDescriptor);

/// Append-only table of mapping configurations
///
/// Keys are ordered pairs compared by type identity: (A, B) and (B, A) are
/// separate entries. The duplicate check and the insert share one write
/// lock, so of two concurrent inserts for the same pair exactly one wins.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    configurations: RwLock<FxHashMap<TypePair, Arc<MappingConfiguration>>>,
}

impl MappingRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the configuration for a type pair
    pub fn find(
        &self,
        source_type: TypeDescriptor,
        destination_type: TypeDescriptor,
    ) -> Result<Option<Arc<MappingConfiguration>>> {
        let configurations = self
            .configurations
            .read()
            .map_err(|_| MapperError::RegistryUnavailable("Failed to acquire read lock".to_string()))?;
        Ok(configurations.get(&(source_type, destination_type)).cloned())
    }

    /// Whether a configuration exists for a type pair
    pub fn contains(&self, source_type: TypeDescriptor, destination_type: TypeDescriptor) -> Result<bool> {
        Ok(self.find(source_type, destination_type)?.is_some())
    }

    /// Register a configuration; fails if the pair already has one
    pub fn insert(
        &self,
        source_type: TypeDescriptor,
        destination_type: TypeDescriptor,
        configuration: Arc<MappingConfiguration>,
    ) -> Result<()> {
        let mut configurations = self
            .configurations
            .write()
            .map_err(|_| MapperError::RegistryUnavailable("Failed to acquire write lock".to_string()))?;

        let key = (source_type, destination_type);
        if configurations.contains_key(&key) {
            return Err(MapperError::duplicate_mapping(
                source_type.name(),
                destination_type.name(),
            ));
        }
        configurations.insert(key, configuration);
        Ok(())
    }

    /// Number of registered configurations
    pub fn len(&self) -> Result<usize> {
        let configurations = self
            .configurations
            .read()
            .map_err(|_| MapperError::RegistryUnavailable("Failed to acquire read lock".to_string()))?;
        Ok(configurations.len())
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// All registered type pairs, in no particular order
    pub fn pairs(&self) -> Result<Vec<TypePair>> {
        let configurations = self
            .configurations
            .read()
            .map_err(|_| MapperError::RegistryUnavailable("Failed to acquire read lock".to_string()))?;
        Ok(configurations.keys().copied().collect())
    }
}
