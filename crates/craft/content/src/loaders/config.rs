//! Detector configuration loader.

use std::path::Path;

use craft_core::DetectorConfig;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// `config.toml` layout; tunables live under `[detector]`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    detector: DetectorConfig,
}

/// Loader for detector configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load detector tunables from a TOML file.
    ///
    /// Missing keys fall back to [`DetectorConfig::default`].
    pub fn load(path: &Path) -> LoadResult<DetectorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<DetectorConfig> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.detector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), DetectorConfig::default());
    }

    #[test]
    fn partial_section_overrides_only_given_keys() {
        let config = ConfigLoader::parse("[detector]\ncheck_range = 3\n").unwrap();
        assert_eq!(config.check_range, 3);
        assert_eq!(config.z_tolerance, DetectorConfig::DEFAULT_Z_TOLERANCE);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(ConfigLoader::parse("[detector]\nz_tolerance = \"high\"\n").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
