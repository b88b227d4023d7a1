//! Traits describing the world data craft rules read.
//!
//! Oracles expose dynamic items, static tiles, line of sight and facility
//! classification. The [`Env`] aggregate bundles them so the detector and
//! craft hooks never hold a concrete world.
mod error;
mod facility;
mod map;
mod sight;

pub use error::OracleError;
pub use facility::FacilityOracle;
pub use map::{MapOracle, StaticTile, WorldItem};
pub use sight::{ClearSight, SightOracle};

/// Aggregates the oracles required by the detector and craft hooks.
pub struct Env<'a, M, S, F>
where
    M: MapOracle + ?Sized,
    S: SightOracle + ?Sized,
    F: FacilityOracle + ?Sized,
{
    map: Option<&'a M>,
    sight: Option<&'a S>,
    facilities: Option<&'a F>,
}

impl<M, S, F> Clone for Env<'_, M, S, F>
where
    M: MapOracle + ?Sized,
    S: SightOracle + ?Sized,
    F: FacilityOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, S, F> Copy for Env<'_, M, S, F>
where
    M: MapOracle + ?Sized,
    S: SightOracle + ?Sized,
    F: FacilityOracle + ?Sized,
{
}

pub type CraftEnv<'a> =
    Env<'a, dyn MapOracle + 'a, dyn SightOracle + 'a, dyn FacilityOracle + 'a>;

impl<'a, M, S, F> Env<'a, M, S, F>
where
    M: MapOracle + ?Sized,
    S: SightOracle + ?Sized,
    F: FacilityOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, sight: Option<&'a S>, facilities: Option<&'a F>) -> Self {
        Self {
            map,
            sight,
            facilities,
        }
    }

    pub fn with_all(map: &'a M, sight: &'a S, facilities: &'a F) -> Self {
        Self::new(Some(map), Some(sight), Some(facilities))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            sight: None,
            facilities: None,
        }
    }

    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::SightNotAvailable` if no sight oracle was provided.
    pub fn sight(&self) -> Result<&'a S, OracleError> {
        self.sight.ok_or(OracleError::SightNotAvailable)
    }

    /// # Errors
    ///
    /// Returns `OracleError::FacilitiesNotAvailable` if no facility oracle was provided.
    pub fn facilities(&self) -> Result<&'a F, OracleError> {
        self.facilities.ok_or(OracleError::FacilitiesNotAvailable)
    }
}

impl<'a, M, S, F> Env<'a, M, S, F>
where
    M: MapOracle + 'a,
    S: SightOracle + 'a,
    F: FacilityOracle + 'a,
{
    /// Converts this environment into a trait-object based `CraftEnv`.
    pub fn into_craft_env(self) -> CraftEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let sight: Option<&'a dyn SightOracle> = self.sight.map(|sight| sight as _);
        let facilities: Option<&'a dyn FacilityOracle> =
            self.facilities.map(|facilities| facilities as _);
        Env::new(map, sight, facilities)
    }
}
