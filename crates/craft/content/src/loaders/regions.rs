//! Special region loader.
//!
//! File format: a list of labeled inclusive rectangles.
//!
//! ```ron
//! [
//!     (
//!         label: "skara_brae_smithy_north",
//!         map: Felucca,
//!         bounds: (x_min: 6896, x_max: 6912, y_min: 145, y_max: 163),
//!     ),
//! ]
//! ```

use std::path::Path;

use craft_core::{RegionOverride, SpecialRegions};

use crate::loaders::{LoadResult, read_file};

/// Loader for the special region exception table.
pub struct RegionLoader;

impl RegionLoader {
    pub fn load(path: &Path) -> LoadResult<SpecialRegions> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load regions {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<SpecialRegions> {
        let entries: Vec<RegionOverride> = ron::from_str(content)?;
        Ok(SpecialRegions::new(entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::MapPlane;

    #[test]
    fn empty_list_disables_overrides() {
        assert!(RegionLoader::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn parses_labeled_rectangles() {
        let regions = RegionLoader::parse(
            r#"[(label: "forge_hall", map: Malas, bounds: (x_min: 10, x_max: 20, y_min: 5, y_max: 6))]"#,
        )
        .unwrap();
        let hit = regions.covering(MapPlane::Malas, 20, 6).unwrap();
        assert_eq!(hit.label, "forge_hall");
        assert!(regions.covering(MapPlane::Malas, 21, 6).is_none());
    }

    #[test]
    fn malformed_bounds_are_rejected() {
        let err = RegionLoader::parse(
            r#"[(label: "upside_down", map: Felucca, bounds: (x_min: 5, x_max: 4, y_min: 0, y_max: 0))]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("upside_down"), "{err}");
    }
}
