//! Content loaders for reading craft data from files.
//!
//! Each loader turns one RON/TOML file into the validated `craft-core` type it
//! describes. Validation errors from `craft-core` are surfaced with the path
//! of the offending file.

pub mod config;
pub mod factory;
pub mod facilities;
pub mod regions;
pub mod tags;
pub mod world;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use facilities::FacilityTableLoader;
pub use regions::RegionLoader;
pub use tags::TypeTagLoader;
pub use world::{BlockerSpec, ItemSpec, StaticSpec, WorldFixture, WorldLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
