//! Facility type tag loader.
//!
//! File format:
//!
//! ```ron
//! [
//!     (type_id: 0x0100, kinds: [Anvil]),
//!     (type_id: 0x0101, kinds: [Anvil, Forge]),
//! ]
//! ```

use std::path::Path;

use craft_core::{FacilityKind, ItemTypeId, TypeTagRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TagSpec {
    type_id: u32,
    kinds: Vec<FacilityKind>,
}

/// Loader for item types tagged as anvils or forges.
pub struct TypeTagLoader;

impl TypeTagLoader {
    pub fn load(path: &Path) -> LoadResult<TypeTagRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load type tags {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TypeTagRegistry> {
        let specs: Vec<TagSpec> = ron::from_str(content)?;

        let mut registry = TypeTagRegistry::new();
        for spec in specs {
            registry.register(ItemTypeId(spec.type_id), spec.kinds)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::FacilityFlags;

    #[test]
    fn registers_each_type() {
        let registry =
            TypeTagLoader::parse("[(type_id: 7, kinds: [Forge]), (type_id: 8, kinds: [Anvil, Forge])]")
                .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.capabilities(ItemTypeId(7)), FacilityFlags::FORGE);
        assert_eq!(registry.capabilities(ItemTypeId(8)), FacilityFlags::all());
        assert!(registry.capabilities(ItemTypeId(9)).is_empty());
    }

    #[test]
    fn duplicate_type_is_rejected() {
        let err = TypeTagLoader::parse("[(type_id: 7, kinds: [Forge]), (type_id: 7, kinds: [Anvil])]")
            .unwrap_err();
        assert!(err.to_string().contains("already"), "{err}");
    }
}
