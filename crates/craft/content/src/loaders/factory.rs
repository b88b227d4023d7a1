//! Content factory for building craft tables from a data directory.

use std::path::{Path, PathBuf};

use craft_core::{
    DetectorConfig, FacilityTable, ProximityDetector, SpecialRegions, TypeTagRegistry,
};

use crate::loaders::{
    ConfigLoader, FacilityTableLoader, LoadResult, RegionLoader, TypeTagLoader, WorldFixture,
    WorldLoader,
};

/// Content factory that loads all craft content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── facilities.ron
/// ├── regions.ron
/// ├── type_tags.ron
/// └── worlds/
///     ├── britain_smithy.ron
///     └── skara_brae.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load detector tunables from `config.toml`.
    pub fn load_config(&self) -> LoadResult<DetectorConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the art-id table from `facilities.ron`.
    pub fn load_facility_table(&self) -> LoadResult<FacilityTable> {
        FacilityTableLoader::load(&self.data_dir.join("facilities.ron"))
    }

    /// Load the special regions from `regions.ron`.
    pub fn load_regions(&self) -> LoadResult<SpecialRegions> {
        RegionLoader::load(&self.data_dir.join("regions.ron"))
    }

    /// Load facility type tags from `type_tags.ron`.
    pub fn load_type_tags(&self) -> LoadResult<TypeTagRegistry> {
        TypeTagLoader::load(&self.data_dir.join("type_tags.ron"))
    }

    /// Load a world fixture from `worlds/{name}.ron`.
    pub fn load_world(&self, name: &str) -> LoadResult<WorldFixture> {
        let path = self.data_dir.join("worlds").join(format!("{}.ron", name));
        WorldLoader::load(&path)
    }

    /// Load every fixture under `worlds/`.
    pub fn load_worlds(&self) -> LoadResult<Vec<(String, WorldFixture)>> {
        WorldLoader::load_dir(&self.data_dir.join("worlds"))
    }

    /// Builds a detector from `config.toml` and `regions.ron`.
    pub fn load_detector(&self) -> LoadResult<ProximityDetector> {
        Ok(ProximityDetector::new(self.load_config()?, self.load_regions()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::{ArtId, FacilityFlags, MapPlane};

    fn bundled() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_facility_table_matches_standard() {
        let table = bundled().load_facility_table().unwrap();
        assert_eq!(table, FacilityTable::standard());
        assert_eq!(table.classify(ArtId(4015)), FacilityFlags::ANVIL);
    }

    #[test]
    fn bundled_detector_uses_defaults_and_legacy_regions() {
        let detector = bundled().load_detector().unwrap();
        assert_eq!(detector.config(), &DetectorConfig::default());
        assert_eq!(detector.regions(), &SpecialRegions::legacy());
    }

    #[test]
    fn bundled_worlds_load() {
        let factory = bundled();
        let worlds = factory.load_worlds().unwrap();
        assert!(!worlds.is_empty());
        assert_eq!(factory.load_world("skara_brae").unwrap().map, MapPlane::Felucca);
        assert!(!factory.load_type_tags().unwrap().is_empty());
    }

    #[test]
    fn missing_directory_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_config().unwrap_err();
        assert!(err.to_string().contains("config.toml"), "{err}");
    }
}
