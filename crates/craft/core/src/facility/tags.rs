use std::collections::HashMap;

use super::{FacilityFlags, FacilityKind, TableError};
use crate::state::ItemTypeId;

/// Capability tags declared by item types at registration time.
///
/// Replaces per-lookup type introspection: a type is tagged once when it is
/// registered and the detector only asks for the resulting flag set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeTagRegistry {
    tags: HashMap<ItemTypeId, FacilityFlags>,
}

impl TypeTagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags `type_id` with the given kinds.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateTypeTag`] if the type was already tagged.
    pub fn register<I>(&mut self, type_id: ItemTypeId, kinds: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = FacilityKind>,
    {
        if self.tags.contains_key(&type_id) {
            return Err(TableError::DuplicateTypeTag(type_id));
        }
        self.tags.insert(type_id, FacilityFlags::from_kinds(kinds));
        Ok(())
    }

    pub fn capabilities(&self, type_id: ItemTypeId) -> FacilityFlags {
        self.tags.get(&type_id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemTypeId, &FacilityFlags)> {
        self.tags.iter()
    }
}
