use crate::facility::FacilityFlags;
use crate::state::{ArtId, ItemTypeId, Serial};

/// Facility-type oracle: what counts as an anvil or forge, and fuel upkeep.
pub trait FacilityOracle: Send + Sync {
    /// Capabilities declared by an item's registered type.
    fn type_capabilities(&self, type_id: ItemTypeId) -> FacilityFlags;

    /// Capabilities implied by an art id (dynamic items and static tiles).
    fn classify_art(&self, art: ArtId) -> FacilityFlags;

    /// Whether an art id belongs to a charged (fuel-burning) forge.
    fn is_charged_forge(&self, art: ArtId) -> bool;

    /// Burns one charge on the given charged forge.
    ///
    /// Returns the charges left afterwards, or `None` if the object keeps no
    /// charge counter.
    fn consume_charge(&self, serial: Serial) -> Option<u32>;
}
