//! Loaded world fixtures served through [`craft_core::MapOracle`] and
//! [`craft_core::SightOracle`].
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use craft_content::WorldFixture;
use craft_core::{MapOracle, MapPlane, Point3, SightOracle, StaticTile, WorldItem};

use super::ChargeLedger;
use super::sight;
use crate::error::{Result, RuntimeError};

/// Solid column `z_min..z_max` in one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Column {
    pub z_min: i32,
    pub z_max: i32,
}

impl Column {
    pub(crate) fn blocks(&self, z: i32) -> bool {
        z >= self.z_min && z < self.z_max
    }
}

#[derive(Debug, Default)]
struct PlaneData {
    items: Vec<WorldItem>,
    statics: HashMap<(i32, i32), Vec<StaticTile>>,
    blockers: HashMap<(i32, i32), Vec<Column>>,
}

/// MapOracle and SightOracle implementation over static fixture data.
///
/// Charged forges whose ledger entry reached zero are no longer reported as
/// items, so an exhausted forge stops satisfying the detector.
pub struct WorldOracleImpl {
    planes: HashMap<MapPlane, PlaneData>,
    ledger: Arc<ChargeLedger>,
}

impl WorldOracleImpl {
    /// Builds the world and the charge ledger from fixtures.
    ///
    /// Several fixtures may describe the same plane; their contents merge.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::DuplicateSerial`] if two items share a serial.
    pub fn from_fixtures<'f>(
        fixtures: impl IntoIterator<Item = &'f WorldFixture>,
    ) -> Result<(Self, Arc<ChargeLedger>)> {
        let mut planes: HashMap<MapPlane, PlaneData> = HashMap::new();
        let mut serials = HashSet::new();
        let mut charges = Vec::new();

        for fixture in fixtures {
            let plane = planes.entry(fixture.map).or_default();

            for spec in &fixture.items {
                let item = spec.to_world_item();
                if !serials.insert(item.serial) {
                    return Err(RuntimeError::DuplicateSerial {
                        serial: item.serial,
                    });
                }
                if let Some(left) = spec.charges {
                    charges.push((item.serial, left));
                }
                plane.items.push(item);
            }

            for spec in &fixture.statics {
                plane
                    .statics
                    .entry((spec.x, spec.y))
                    .or_default()
                    .push(spec.tile());
            }

            for spec in &fixture.blockers {
                plane.blockers.entry((spec.x, spec.y)).or_default().push(Column {
                    z_min: spec.z,
                    z_max: spec.z.saturating_add(spec.height),
                });
            }
        }

        let ledger = Arc::new(ChargeLedger::new(charges));
        let world = Self {
            planes,
            ledger: Arc::clone(&ledger),
        };
        tracing::debug!(
            planes = world.planes.len(),
            charged = ledger.len(),
            "world fixtures loaded"
        );
        Ok((world, ledger))
    }

    /// A world with nothing in it.
    pub fn empty() -> Self {
        Self {
            planes: HashMap::new(),
            ledger: Arc::new(ChargeLedger::default()),
        }
    }

    /// Items still reported on `map`; depleted forges are not counted.
    pub fn item_count(&self, map: MapPlane) -> usize {
        self.planes.get(&map).map_or(0, |plane| {
            plane
                .items
                .iter()
                .filter(|item| !self.ledger.is_depleted(item.serial))
                .count()
        })
    }

    pub(crate) fn columns(&self, map: MapPlane, x: i32, y: i32) -> &[Column] {
        self.planes
            .get(&map)
            .and_then(|plane| plane.blockers.get(&(x, y)))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl MapOracle for WorldOracleImpl {
    fn items_in_range(&self, map: MapPlane, center: Point3, range: u32) -> Vec<WorldItem> {
        let Some(plane) = self.planes.get(&map) else {
            return Vec::new();
        };
        plane
            .items
            .iter()
            .filter(|item| center.in_box_range(item.location, range))
            .filter(|item| !self.ledger.is_depleted(item.serial))
            .copied()
            .collect()
    }

    fn static_tiles(&self, map: MapPlane, x: i32, y: i32) -> Vec<StaticTile> {
        self.planes
            .get(&map)
            .and_then(|plane| plane.statics.get(&(x, y)))
            .cloned()
            .unwrap_or_default()
    }
}

impl SightOracle for WorldOracleImpl {
    fn in_line_of_sight(&self, map: MapPlane, from: Point3, to: Point3) -> bool {
        sight::is_clear(from, to, |x, y, z| {
            self.columns(map, x, y).iter().any(|column| column.blocks(z))
        })
    }
}
