//! Elevation and line-of-sight geometry shared by the scan phases.

use crate::env::StaticTile;
use crate::state::Point3;

/// Whether `target_z` lies within `tolerance` of `actor_z`, both directions.
pub(crate) fn within_vertical_tolerance(actor_z: i32, target_z: i32, tolerance: i32) -> bool {
    actor_z.saturating_add(tolerance) >= target_z && target_z.saturating_add(tolerance) >= actor_z
}

/// Point the line-of-sight probe aims at for a static tile at cell `(x, y)`.
///
/// Sits just above the tile's top: `z + height / divisor + divisor`.
pub(crate) fn static_sight_target(x: i32, y: i32, tile: &StaticTile, divisor: i32) -> Point3 {
    let divisor = divisor.max(1);
    let lift = (tile.height / divisor).saturating_add(divisor);
    Point3::new(x, y, tile.z.saturating_add(lift))
}

/// Signed search span for a radius, clamped to what fits in `i32`.
pub(crate) fn signed_radius(radius: u32) -> i32 {
    i32::try_from(radius).unwrap_or(i32::MAX)
}
