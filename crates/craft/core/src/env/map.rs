use crate::state::{ArtId, ItemTypeId, MapPlane, Point3, Serial};

/// World map oracle: dynamic items and static (terrain-baked) tiles.
pub trait MapOracle: Send + Sync {
    /// Items within box radius `range` of `center` on `map`.
    fn items_in_range(&self, map: MapPlane, center: Point3, range: u32) -> Vec<WorldItem>;

    /// Static tiles stacked on grid cell `(x, y)` of `map`.
    fn static_tiles(&self, map: MapPlane, x: i32, y: i32) -> Vec<StaticTile>;
}

/// Dynamic object as seen by the detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldItem {
    pub serial: Serial,
    pub type_id: ItemTypeId,
    pub art: ArtId,
    pub location: Point3,
}

impl WorldItem {
    pub const fn new(serial: Serial, type_id: ItemTypeId, art: ArtId, location: Point3) -> Self {
        Self {
            serial,
            type_id,
            art,
            location,
        }
    }
}

/// Immutable terrain tile baked into the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    pub art: ArtId,
    /// Base elevation.
    pub z: i32,
    pub height: i32,
}

impl StaticTile {
    pub const fn new(art: ArtId, z: i32, height: i32) -> Self {
        Self { art, z, height }
    }
}
