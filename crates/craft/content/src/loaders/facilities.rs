//! Facility art table loader.
//!
//! File format:
//!
//! ```ron
//! (
//!     ranges: [
//!         (start: 4015, end: 4016, kinds: [Anvil]),
//!         (start: 6522, end: 6569, kinds: [Forge]),
//!     ],
//!     charged_forge: Some((start: 6896, end: 6898)),
//! )
//! ```

use std::path::Path;

use craft_core::{ArtRange, FacilityFlags, FacilityKind, FacilityTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RangeSpec {
    start: u16,
    end: u16,
    kinds: Vec<FacilityKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChargedSpec {
    start: u16,
    end: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FacilityTableRon {
    ranges: Vec<RangeSpec>,
    #[serde(default)]
    charged_forge: Option<ChargedSpec>,
}

/// Loader for the art-id facility table.
pub struct FacilityTableLoader;

impl FacilityTableLoader {
    pub fn load(path: &Path) -> LoadResult<FacilityTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load facility table {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<FacilityTable> {
        let data: FacilityTableRon = ron::from_str(content)?;

        let ranges = data
            .ranges
            .into_iter()
            .map(|spec| ArtRange::span(spec.start, spec.end, FacilityFlags::from_kinds(spec.kinds)))
            .collect();
        let charged = data
            .charged_forge
            .map(|spec| ArtRange::span(spec.start, spec.end, FacilityFlags::FORGE));

        Ok(FacilityTable::new(ranges, charged)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::ArtId;

    #[test]
    fn parses_ranges_and_charged_forge() {
        let table = FacilityTableLoader::parse(
            r#"(
                ranges: [
                    (start: 4015, end: 4016, kinds: [Anvil]),
                    (start: 100, end: 100, kinds: [Anvil, Forge]),
                ],
                charged_forge: Some((start: 6896, end: 6898)),
            )"#,
        )
        .unwrap();

        assert_eq!(table.classify(ArtId(4016)), FacilityFlags::ANVIL);
        assert_eq!(table.classify(ArtId(100)), FacilityFlags::all());
        assert!(table.is_charged_forge(ArtId(6897)));
        assert!(table.classify(ArtId(6897)).is_empty());
    }

    #[test]
    fn charged_forge_is_optional() {
        let table = FacilityTableLoader::parse("(ranges: [])").unwrap();
        assert!(table.charged_range().is_none());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = FacilityTableLoader::parse("(ranges: [(start: 10, end: 9, kinds: [Forge])])")
            .unwrap_err();
        assert!(err.to_string().contains("inverted"), "{err}");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let parsed = FacilityTableLoader::parse("(ranges: [(start: 1, end: 1, kinds: [Oven])])");
        assert!(parsed.is_err());
    }
}
