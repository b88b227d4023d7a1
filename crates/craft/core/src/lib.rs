//! Craft-permission rules and blacksmithing facility detection.
//!
//! `craft-core` defines the canonical rules that decide whether an actor may
//! start a craft: tool validation, location gating and the anvil/forge
//! proximity detector used by blacksmithing. World access goes through the
//! oracle traits in [`env`], so the same rules run against the live shard,
//! content fixtures, or test fakes.
pub mod config;
pub mod craft;
pub mod detect;
pub mod env;
pub mod error;
pub mod facility;
pub mod state;

pub use config::DetectorConfig;
pub use craft::{
    Blacksmithy, CraftDenial, CraftOutcome, CraftSystem, CraftSystemKind, Crafter, EndingMessage,
    FORGE_CHECK_DISTANCE, GLASSBLOWING_SKILL, Glassblowing, GodCraft, Masonry, MessageId,
    PlainCraft, Quality, STONECRAFT_SKILL, ToolState, standard_systems,
};
pub use detect::{FacilityScan, ProximityDetector};
pub use env::{
    ClearSight, CraftEnv, Env, FacilityOracle, MapOracle, OracleError, SightOracle, StaticTile,
    WorldItem,
};
pub use error::{ErrorSeverity, ShardError};
pub use facility::{
    ArtRange, FacilityFlags, FacilityKind, FacilityTable, RegionOverride, SpecialRegions,
    TableError, TypeTagRegistry,
};
pub use state::{ActorLocation, ArtId, ItemTypeId, MapPlane, Point3, Rect, Serial};
