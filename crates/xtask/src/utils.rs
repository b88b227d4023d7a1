//! Utility functions for xtask commands

use craft_core::{CraftSystemKind, MapPlane};

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn parse_plane(value: &str) -> Result<MapPlane, String> {
    value
        .parse()
        .map_err(|_| format!("unknown map plane '{value}'"))
}

pub fn parse_system(value: &str) -> Result<CraftSystemKind, String> {
    value
        .parse()
        .map_err(|_| format!("unknown craft system '{value}'"))
}

pub fn yes_no(value: bool) -> console::StyledObject<&'static str> {
    if value {
        console::style("yes").green()
    } else {
        console::style("no").red()
    }
}
