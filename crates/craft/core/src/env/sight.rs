use crate::state::{MapPlane, Point3};

/// Line-of-sight oracle.
pub trait SightOracle: Send + Sync {
    /// Whether an observer standing at `from` can see `to` on `map`.
    fn in_line_of_sight(&self, map: MapPlane, from: Point3, to: Point3) -> bool;
}

/// Sight oracle for open ground: nothing ever blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClearSight;

impl SightOracle for ClearSight {
    fn in_line_of_sight(&self, _map: MapPlane, _from: Point3, _to: Point3) -> bool {
        true
    }
}
