//! Facility classification served through [`craft_core::FacilityOracle`].
use std::sync::Arc;

use craft_core::{
    ArtId, FacilityFlags, FacilityOracle, FacilityTable, ItemTypeId, Serial, TypeTagRegistry,
};

use super::ChargeLedger;

/// FacilityOracle implementation backed by loaded tables.
///
/// Tables are immutable; only the shared [`ChargeLedger`] changes.
pub struct FacilityOracleImpl {
    table: FacilityTable,
    tags: TypeTagRegistry,
    ledger: Arc<ChargeLedger>,
}

impl FacilityOracleImpl {
    pub fn new(table: FacilityTable, tags: TypeTagRegistry, ledger: Arc<ChargeLedger>) -> Self {
        Self {
            table,
            tags,
            ledger,
        }
    }

    /// Standard art table, no type tags, no tracked charges.
    pub fn standard() -> Self {
        Self::new(
            FacilityTable::standard(),
            TypeTagRegistry::new(),
            Arc::new(ChargeLedger::default()),
        )
    }

    pub fn table(&self) -> &FacilityTable {
        &self.table
    }

    pub fn ledger(&self) -> &ChargeLedger {
        &self.ledger
    }
}

impl FacilityOracle for FacilityOracleImpl {
    fn type_capabilities(&self, type_id: ItemTypeId) -> FacilityFlags {
        self.tags.capabilities(type_id)
    }

    fn classify_art(&self, art: ArtId) -> FacilityFlags {
        self.table.classify(art)
    }

    fn is_charged_forge(&self, art: ArtId) -> bool {
        self.table.is_charged_forge(art)
    }

    fn consume_charge(&self, serial: Serial) -> Option<u32> {
        let left = self.ledger.consume(serial);
        match left {
            Some(0) => tracing::info!(%serial, "charged forge depleted"),
            Some(left) => tracing::debug!(%serial, left, "charged forge used"),
            None => tracing::debug!(%serial, "charged forge has no tracked charges"),
        }
        left
    }
}
