//! Data-driven craft content and loaders.
//!
//! This crate reads the shard's craft data from RON/TOML files:
//! - Detector tunables (TOML)
//! - Facility art tables and the charged-forge range (RON)
//! - Facility type tags (RON)
//! - Legacy special regions (RON)
//! - World fixtures: items, static tiles and sight blockers per plane (RON)
//!
//! Content is consumed by runtime oracles and never mutated after load.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BlockerSpec, ConfigLoader, ContentFactory, FacilityTableLoader, ItemSpec, LoadResult,
    RegionLoader, StaticSpec, TypeTagLoader, WorldFixture, WorldLoader,
};
