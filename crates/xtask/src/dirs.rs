//! Craft data directory resolution.

use std::path::PathBuf;

/// Environment variable naming the craft data directory.
pub const DATA_DIR_ENV: &str = "CRAFT_DATA_DIR";

/// Resolves the data directory.
///
/// Order: explicit `--data-dir`, then `CRAFT_DATA_DIR` (environment or
/// `.env`), then the content crate's bundled `data/` directory.
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    let (dir, source) = if let Some(dir) = explicit {
        (dir, "--data-dir")
    } else if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        (PathBuf::from(dir), DATA_DIR_ENV)
    } else {
        (bundled_data_dir(), "bundled")
    };

    tracing::debug!(dir = %dir.display(), source, "resolved craft data directory");
    dir
}

fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("craft")
        .join("content")
        .join("data")
}
