//! World fixture loader.
//!
//! A fixture describes one plane's worth of craft-relevant world data:
//! dynamic items (optionally carrying forge charges), static tiles and solid
//! columns that block line of sight.
//!
//! ```ron
//! (
//!     map: Trammel,
//!     items: [
//!         (serial: 1, art: 4015, x: 1400, y: 1600, z: 0),
//!         (serial: 2, art: 6897, x: 1402, y: 1600, z: 0, charges: Some(20)),
//!     ],
//!     statics: [(x: 1398, y: 1600, art: 4017, z: 0, height: 10)],
//!     blockers: [(x: 1401, y: 1601, z: 0, height: 20)],
//! )
//! ```

use std::collections::HashSet;
use std::path::Path;

use craft_core::{ArtId, ItemTypeId, MapPlane, Point3, Serial, StaticTile, WorldItem};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub serial: u32,
    #[serde(default)]
    pub type_id: u32,
    pub art: u16,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    /// Remaining uses of a charged forge.
    #[serde(default)]
    pub charges: Option<u32>,
}

impl ItemSpec {
    pub fn to_world_item(&self) -> WorldItem {
        WorldItem::new(
            Serial(self.serial),
            ItemTypeId(self.type_id),
            ArtId(self.art),
            Point3::new(self.x, self.y, self.z),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSpec {
    pub x: i32,
    pub y: i32,
    pub art: u16,
    pub z: i32,
    #[serde(default)]
    pub height: i32,
}

impl StaticSpec {
    pub fn tile(&self) -> StaticTile {
        StaticTile::new(ArtId(self.art), self.z, self.height)
    }
}

/// Solid column occupying `z..z + height` at one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockerSpec {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldFixture {
    pub map: MapPlane,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
    #[serde(default)]
    pub statics: Vec<StaticSpec>,
    #[serde(default)]
    pub blockers: Vec<BlockerSpec>,
}

/// Loader for world fixtures.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<WorldFixture> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load world {}: {}", path.display(), e))
    }

    /// Parses a fixture, rejecting duplicate item serials.
    pub fn parse(content: &str) -> LoadResult<WorldFixture> {
        let fixture: WorldFixture = ron::from_str(content)?;

        let mut seen = HashSet::new();
        for item in &fixture.items {
            if !seen.insert(item.serial) {
                anyhow::bail!("duplicate item serial {:#010x}", item.serial);
            }
        }

        Ok(fixture)
    }

    /// Loads every `*.ron` fixture in `dir`, sorted by file stem.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<(String, WorldFixture)>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut worlds = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("ron") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            worlds.push((name.to_owned(), Self::load(&path)?));
        }

        worlds.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(worlds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sections_default_to_empty() {
        let fixture = WorldLoader::parse("(map: Ilshenar)").unwrap();
        assert_eq!(fixture.map, MapPlane::Ilshenar);
        assert!(
            fixture.items.is_empty() && fixture.statics.is_empty() && fixture.blockers.is_empty()
        );
    }

    #[test]
    fn items_convert_to_world_items() {
        let fixture = WorldLoader::parse(
            "(map: Trammel, items: [(serial: 5, art: 6897, x: 1, y: 2, z: 3, charges: Some(4))])",
        )
        .unwrap();
        let item = &fixture.items[0];
        assert_eq!(item.charges, Some(4));
        assert_eq!(item.to_world_item().art, ArtId(6897));
        assert_eq!(item.to_world_item().location, Point3::new(1, 2, 3));
        assert_eq!(item.to_world_item().type_id, ItemTypeId(0));
    }

    #[test]
    fn duplicate_serials_are_rejected() {
        let err = WorldLoader::parse(
            "(map: Trammel, items: [(serial: 5, art: 1, x: 0, y: 0, z: 0), (serial: 5, art: 2, x: 1, y: 0, z: 0)])",
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn load_dir_skips_other_files_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.ron"), "(map: Malas)").unwrap();
        std::fs::write(dir.path().join("a.ron"), "(map: Tokuno)").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a world").unwrap();

        let worlds = WorldLoader::load_dir(dir.path()).unwrap();
        let names: Vec<_> = worlds.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(worlds[0].1.map, MapPlane::Tokuno);
    }
}
