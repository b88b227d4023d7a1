//! Phase one: dynamic items around the actor.

use super::geometry::within_vertical_tolerance;
use super::{FacilityScan, Probe};
use crate::env::{FacilityOracle, MapOracle, SightOracle};
use crate::facility::FacilityFlags;

pub(super) fn scan_items<M, S, F>(probe: &Probe<'_, M, S, F>, radius: u32, scan: &mut FacilityScan)
where
    M: MapOracle + ?Sized,
    S: SightOracle + ?Sized,
    F: FacilityOracle + ?Sized,
{
    let origin = probe.origin;

    for item in probe.map.items_in_range(probe.plane, origin, radius) {
        if scan.is_complete() {
            break;
        }

        let charged = probe.facilities.is_charged_forge(item.art);
        let mut flags = probe.facilities.type_capabilities(item.type_id)
            | probe.facilities.classify_art(item.art);
        if charged {
            flags |= FacilityFlags::FORGE;
        }
        if flags.is_empty() {
            continue;
        }

        if !within_vertical_tolerance(origin.z, item.location.z, probe.z_tolerance)
            || !probe.sight.in_line_of_sight(probe.plane, origin, item.location)
        {
            continue;
        }

        // Only the forge that actually satisfies the condition burns fuel.
        if charged && !scan.forge {
            probe.facilities.consume_charge(item.serial);
        }

        scan.record(flags);
    }
}
