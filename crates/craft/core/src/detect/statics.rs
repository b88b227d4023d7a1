//! Phase two: static tiles in the square neighbourhood.

use super::geometry::{signed_radius, static_sight_target, within_vertical_tolerance};
use super::{FacilityScan, Probe};
use crate::env::{FacilityOracle, MapOracle, SightOracle};

pub(super) fn scan_statics<M, S, F>(
    probe: &Probe<'_, M, S, F>,
    radius: u32,
    height_divisor: i32,
    scan: &mut FacilityScan,
) where
    M: MapOracle + ?Sized,
    S: SightOracle + ?Sized,
    F: FacilityOracle + ?Sized,
{
    let origin = probe.origin;
    let span = signed_radius(radius);

    for dx in -span..=span {
        if scan.is_complete() {
            break;
        }
        for dy in -span..=span {
            if scan.is_complete() {
                break;
            }

            let x = origin.x.saturating_add(dx);
            let y = origin.y.saturating_add(dy);

            for tile in probe.map.static_tiles(probe.plane, x, y) {
                if scan.is_complete() {
                    break;
                }

                let flags = probe.facilities.classify_art(tile.art);
                if flags.is_empty() {
                    continue;
                }

                let target = static_sight_target(x, y, &tile, height_divisor);
                if !within_vertical_tolerance(origin.z, tile.z, probe.z_tolerance)
                    || !probe.sight.in_line_of_sight(probe.plane, origin, target)
                {
                    continue;
                }

                scan.record(flags);
            }
        }
    }
}
