//! Run the anvil/forge detector at a location.

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;
use std::path::PathBuf;

use craft_content::ContentFactory;
use craft_core::{ActorLocation, MapPlane, Point3};
use craft_runtime::OracleManager;

use crate::{dirs, utils};

/// Run the anvil/forge detector at a location
#[derive(Parser)]
pub struct Probe {
    /// Map plane, case-insensitive (Felucca, Trammel, Ilshenar, Malas, Tokuno, TerMur)
    #[arg(long, value_parser = utils::parse_plane)]
    map: MapPlane,

    #[arg(long, allow_negative_numbers = true)]
    x: i32,

    #[arg(long, allow_negative_numbers = true)]
    y: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    z: i32,

    /// Box radius (defaults to the configured check range)
    #[arg(short, long)]
    radius: Option<u32>,

    /// Craft data directory (defaults to CRAFT_DATA_DIR, then bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// JSON report
    Json,
}

#[derive(Serialize)]
struct ProbeReport {
    map: String,
    x: i32,
    y: i32,
    z: i32,
    radius: u32,
    anvil: bool,
    forge: bool,
    region: Option<String>,
}

impl Probe {
    pub fn execute(self) -> Result<()> {
        let factory = ContentFactory::new(dirs::data_dir(self.data_dir));
        let detector = factory.load_detector()?;
        let oracles = OracleManager::from_content(&factory)?;

        let position = Point3::new(self.x, self.y, self.z);
        let radius = self.radius.unwrap_or(detector.config().check_range);
        let scan = detector.detect(
            &oracles.as_craft_env(),
            ActorLocation::new(position, self.map),
            radius,
        );
        let region = detector
            .regions()
            .covering(self.map, self.x, self.y)
            .map(|region| region.label.clone());

        let report = ProbeReport {
            map: self.map.to_string(),
            x: self.x,
            y: self.y,
            z: self.z,
            radius,
            anvil: scan.anvil,
            forge: scan.forge,
            region,
        };

        match self.format {
            OutputFormat::Summary => print_summary(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        Ok(())
    }
}

fn print_summary(report: &ProbeReport) {
    println!(
        "{} {} ({}, {}, {}) radius {}",
        style("Probe:").bold().cyan(),
        report.map,
        report.x,
        report.y,
        report.z,
        report.radius
    );
    println!("  Anvil: {}", utils::yes_no(report.anvil));
    println!("  Forge: {}", utils::yes_no(report.forge));
    if let Some(region) = &report.region {
        println!("  Special region: {}", style(region).yellow());
    }
}
