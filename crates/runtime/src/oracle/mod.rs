//! Runtime implementations of the craft-core oracle traits.
//!
//! World fixtures and facility tables are loaded once and bundled into an
//! [`OracleManager`] so callers can build [`craft_core::CraftEnv`] snapshots
//! on demand. The only state that changes after load is the
//! [`ChargeLedger`], which the world and facility oracles share.
mod facility;
mod ledger;
mod sight;
mod world;

use std::sync::Arc;

use craft_content::{ContentFactory, WorldFixture};
use craft_core::{CraftEnv, Env, FacilityTable, TypeTagRegistry};

pub use facility::FacilityOracleImpl;
pub use ledger::ChargeLedger;
pub use world::WorldOracleImpl;

use crate::error::{Result, RuntimeError};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) world: Arc<WorldOracleImpl>,
    pub(crate) facilities: Arc<FacilityOracleImpl>,
}

impl OracleManager {
    pub fn new(world: Arc<WorldOracleImpl>, facilities: Arc<FacilityOracleImpl>) -> Self {
        Self { world, facilities }
    }

    /// Loads tables and every world fixture from a data directory.
    pub fn from_content(factory: &ContentFactory) -> Result<Self> {
        let table = factory.load_facility_table().map_err(RuntimeError::Content)?;
        let tags = factory.load_type_tags().map_err(RuntimeError::Content)?;
        let worlds = factory.load_worlds().map_err(RuntimeError::Content)?;

        let (world, ledger) = WorldOracleImpl::from_fixtures(worlds.iter().map(|(_, w)| w))?;
        tracing::info!(
            data_dir = %factory.data_dir().display(),
            worlds = worlds.len(),
            type_tags = tags.len(),
            "craft oracles loaded"
        );

        Ok(Self::new(
            Arc::new(world),
            Arc::new(FacilityOracleImpl::new(table, tags, ledger)),
        ))
    }

    /// Builds oracles over in-memory fixtures with the standard art table.
    pub fn from_fixtures<'f>(
        fixtures: impl IntoIterator<Item = &'f WorldFixture>,
        tags: TypeTagRegistry,
    ) -> Result<Self> {
        let (world, ledger) = WorldOracleImpl::from_fixtures(fixtures)?;
        let facilities = FacilityOracleImpl::new(FacilityTable::standard(), tags, ledger);
        Ok(Self::new(Arc::new(world), Arc::new(facilities)))
    }

    /// Empty world with the standard facility table.
    pub fn empty() -> Self {
        let world = WorldOracleImpl::empty();
        let facilities = FacilityOracleImpl::standard();
        Self::new(Arc::new(world), Arc::new(facilities))
    }

    /// Converts oracle manager into CraftEnv for craft-core
    pub fn as_craft_env(&self) -> CraftEnv<'_> {
        Env::with_all(
            self.world.as_ref(),
            self.world.as_ref(),
            self.facilities.as_ref(),
        )
        .into_craft_env()
    }

    pub fn world(&self) -> &WorldOracleImpl {
        &self.world
    }

    pub fn facilities(&self) -> &FacilityOracleImpl {
        &self.facilities
    }

    pub fn ledger(&self) -> &ChargeLedger {
        self.facilities.ledger()
    }
}

impl Default for OracleManager {
    fn default() -> Self {
        Self::empty()
    }
}
