//! Load every content file and report what was found.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use craft_content::ContentFactory;

use crate::dirs;

/// Load and validate every content file
#[derive(Parser)]
pub struct Validate {
    /// Craft data directory (defaults to CRAFT_DATA_DIR, then bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        let factory = ContentFactory::new(&data_dir);

        println!("{} {}", style("Data Directory:").bold().cyan(), data_dir.display());
        println!();

        let config = factory.load_config()?;
        println!(
            "  {} check_range={} z_tolerance={} tile_height_divisor={}",
            style("config.toml").yellow(),
            config.check_range,
            config.z_tolerance,
            config.tile_height_divisor
        );

        let table = factory.load_facility_table()?;
        let charged = table
            .charged_range()
            .map(|range| format!("{}..={}", range.start, range.end))
            .unwrap_or_else(|| "none".to_owned());
        println!(
            "  {} {} ranges, charged forge {}",
            style("facilities.ron").yellow(),
            table.ranges().len(),
            charged
        );

        let regions = factory.load_regions()?;
        println!("  {} {} regions", style("regions.ron").yellow(), regions.len());
        for region in regions.entries() {
            println!("    - {} on {}", region.label, region.map);
        }

        let tags = factory.load_type_tags()?;
        println!("  {} {} types", style("type_tags.ron").yellow(), tags.len());

        let worlds = factory.load_worlds()?;
        for (name, world) in &worlds {
            println!(
                "  {} {}: {} items, {} statics, {} blockers",
                style(format!("worlds/{name}.ron")).yellow(),
                world.map,
                world.items.len(),
                world.statics.len(),
                world.blockers.len()
            );
        }

        let oracles = craft_runtime::OracleManager::from_content(&factory)
            .context("content loads individually but fails to assemble")?;
        for (name, world) in &worlds {
            tracing::debug!(
                world = %name,
                map = %world.map,
                live_items = oracles.world().item_count(world.map),
                "world assembled"
            );
        }

        println!();
        println!("{}", style("All content valid").bold().green());
        Ok(())
    }
}
