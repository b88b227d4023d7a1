use super::TableError;
use crate::state::{MapPlane, Rect};

/// A zone where both facility kinds are always considered present.
///
/// Entries bypass line of sight and elevation entirely. They exist for old
/// city districts whose smithies were never placed as real world objects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionOverride {
    pub label: String,
    pub map: MapPlane,
    /// Inclusive bounds.
    pub bounds: Rect,
}

impl RegionOverride {
    pub fn new(label: impl Into<String>, map: MapPlane, bounds: Rect) -> Self {
        Self {
            label: label.into(),
            map,
            bounds,
        }
    }

    pub fn covers(&self, map: MapPlane, x: i32, y: i32) -> bool {
        self.map == map && self.bounds.contains_inclusive(x, y)
    }
}

/// Exception table consulted after the world scans come up short.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialRegions {
    entries: Vec<RegionOverride>,
}

impl SpecialRegions {
    /// # Errors
    ///
    /// Returns [`TableError::MalformedRegion`] for a rectangle with min above max.
    pub fn new(entries: Vec<RegionOverride>) -> Result<Self, TableError> {
        if let Some(bad) = entries.iter().find(|entry| !entry.bounds.is_well_formed()) {
            return Err(TableError::MalformedRegion {
                label: bad.label.clone(),
                map: bad.map,
            });
        }
        Ok(Self { entries })
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// The two Skara Brae smithing districts on Felucca.
    pub fn legacy() -> Self {
        Self {
            entries: vec![
                RegionOverride::new(
                    "skara_brae_smithy_north",
                    MapPlane::Felucca,
                    Rect::new(6896, 6912, 145, 163),
                ),
                RegionOverride::new(
                    "skara_brae_smithy_south",
                    MapPlane::Felucca,
                    Rect::new(6911, 6920, 179, 186),
                ),
            ],
        }
    }

    /// First entry covering the cell, if any.
    pub fn covering(&self, map: MapPlane, x: i32, y: i32) -> Option<&RegionOverride> {
        self.entries.iter().find(|entry| entry.covers(map, x, y))
    }

    pub fn entries(&self) -> &[RegionOverride] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
