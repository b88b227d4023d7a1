//! Anvil and forge proximity detection for blacksmithing.
//!
//! Detection runs three ordered phases and stops as soon as both facility
//! kinds are satisfied:
//!
//! 1. dynamic items within box range (type tags, art allow-list, charged forges)
//! 2. static tiles in the `(2r + 1)²` neighbourhood (art allow-list only)
//! 3. legacy special regions, which force both kinds on unconditionally
//!
//! Phases 1 and 2 reject candidates outside the vertical tolerance or out of
//! the actor's line of sight. The function is total: a missing plane or a
//! missing oracle simply yields fewer matches.
mod dynamic;
mod geometry;
mod statics;

#[cfg(test)]
mod tests;

use crate::config::DetectorConfig;
use crate::env::{Env, FacilityOracle, MapOracle, SightOracle};
use crate::facility::{FacilityFlags, FacilityKind, SpecialRegions};
use crate::state::{ActorLocation, MapPlane, Point3};

/// Result of one detection call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FacilityScan {
    pub anvil: bool,
    pub forge: bool,
}

impl FacilityScan {
    pub const NONE: Self = Self {
        anvil: false,
        forge: false,
    };
    pub const BOTH: Self = Self {
        anvil: true,
        forge: true,
    };

    pub const fn new(anvil: bool, forge: bool) -> Self {
        Self { anvil, forge }
    }

    pub const fn is_complete(&self) -> bool {
        self.anvil && self.forge
    }

    pub fn has(&self, kind: FacilityKind) -> bool {
        match kind {
            FacilityKind::Anvil => self.anvil,
            FacilityKind::Forge => self.forge,
        }
    }

    /// Kinds still unsatisfied.
    pub fn missing(&self) -> FacilityFlags {
        let mut missing = FacilityFlags::empty();
        if !self.anvil {
            missing |= FacilityFlags::ANVIL;
        }
        if !self.forge {
            missing |= FacilityFlags::FORGE;
        }
        missing
    }

    pub(crate) fn record(&mut self, flags: FacilityFlags) {
        self.anvil |= flags.contains(FacilityFlags::ANVIL);
        self.forge |= flags.contains(FacilityFlags::FORGE);
    }
}

impl From<FacilityScan> for (bool, bool) {
    fn from(scan: FacilityScan) -> Self {
        (scan.anvil, scan.forge)
    }
}

/// Oracles and actor frame shared by the world scans.
pub(crate) struct Probe<'p, M, S, F>
where
    M: MapOracle + ?Sized,
    S: SightOracle + ?Sized,
    F: FacilityOracle + ?Sized,
{
    map: &'p M,
    sight: &'p S,
    facilities: &'p F,
    plane: MapPlane,
    origin: Point3,
    z_tolerance: i32,
}

/// Stateless anvil/forge detector.
///
/// Holds only its tunables and the special-region table, so one instance can
/// serve every actor concurrently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProximityDetector {
    config: DetectorConfig,
    regions: SpecialRegions,
}

impl ProximityDetector {
    pub fn new(config: DetectorConfig, regions: SpecialRegions) -> Self {
        Self { config, regions }
    }

    /// Detector with default tunables and the legacy Skara Brae districts.
    pub fn standard() -> Self {
        Self::new(DetectorConfig::default(), SpecialRegions::legacy())
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn regions(&self) -> &SpecialRegions {
        &self.regions
    }

    /// Detects facilities within the configured check range.
    pub fn detect_nearby<M, S, F>(
        &self,
        env: &Env<'_, M, S, F>,
        location: ActorLocation,
    ) -> FacilityScan
    where
        M: MapOracle + ?Sized,
        S: SightOracle + ?Sized,
        F: FacilityOracle + ?Sized,
    {
        self.detect(env, location, self.config.check_range)
    }

    /// Detects anvil and forge within box `radius` of `location`.
    pub fn detect<M, S, F>(
        &self,
        env: &Env<'_, M, S, F>,
        location: ActorLocation,
        radius: u32,
    ) -> FacilityScan
    where
        M: MapOracle + ?Sized,
        S: SightOracle + ?Sized,
        F: FacilityOracle + ?Sized,
    {
        let mut scan = FacilityScan::NONE;
        let Some(plane) = location.map else {
            return scan;
        };

        if let (Ok(map), Ok(sight), Ok(facilities)) = (env.map(), env.sight(), env.facilities()) {
            let probe = Probe {
                map,
                sight,
                facilities,
                plane,
                origin: location.position,
                z_tolerance: self.config.z_tolerance,
            };

            dynamic::scan_items(&probe, radius, &mut scan);

            if !scan.is_complete() {
                statics::scan_statics(
                    &probe,
                    radius,
                    self.config.effective_tile_divisor(),
                    &mut scan,
                );
            }
        }

        if !scan.is_complete()
            && self
                .regions
                .covering(plane, location.position.x, location.position.y)
                .is_some()
        {
            scan = FacilityScan::BOTH;
        }

        scan
    }
}
