//! Ask a craft system whether a crafter may begin.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use craft_content::ContentFactory;
use craft_core::{ActorLocation, CraftSystemKind, Crafter, MapPlane, Point3, ToolState};
use craft_runtime::{CraftGate, OracleManager, RuntimeError};

use crate::{dirs, utils};

/// Ask a craft system whether a crafter may begin
#[derive(Parser)]
pub struct CheckCraft {
    /// Craft system (blacksmithy, glassblowing, tailoring, masonry, god_smithing, ...)
    #[arg(value_parser = utils::parse_system)]
    system: CraftSystemKind,

    #[arg(long, value_parser = utils::parse_plane)]
    map: MapPlane,

    #[arg(long, allow_negative_numbers = true)]
    x: i32,

    #[arg(long, allow_negative_numbers = true)]
    y: i32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    z: i32,

    /// Remaining tool uses; negative means worn out
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    uses: i32,

    /// Craft without any tool
    #[arg(long)]
    no_tool: bool,

    /// Another crafting tool is equipped
    #[arg(long)]
    other_tool_equipped: bool,

    /// Carpentry base skill; enables learned stonecraft when given
    #[arg(long, value_name = "SKILL")]
    masonry: Option<f64>,

    /// Alchemy base skill; enables learned glassblowing when given
    #[arg(long, value_name = "SKILL")]
    glassblowing: Option<f64>,

    /// Craft data directory (defaults to CRAFT_DATA_DIR, then bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl CheckCraft {
    pub fn execute(self) -> Result<()> {
        let factory = ContentFactory::new(dirs::data_dir(self.data_dir));
        let gate = CraftGate::standard(factory.load_detector()?);
        let oracles = OracleManager::from_content(&factory)?;

        let location = ActorLocation::new(Point3::new(self.x, self.y, self.z), self.map);
        let mut crafter = Crafter::player(location);
        if let Some(skill) = self.masonry {
            crafter = crafter.with_masonry(skill);
        }
        if let Some(skill) = self.glassblowing {
            crafter = crafter.with_glassblowing(skill);
        }

        let tool = ToolState {
            other_tool_equipped: self.other_tool_equipped,
            ..ToolState::in_pack(self.uses)
        };
        let tool = (!self.no_tool).then_some(tool);

        match gate.begin(&oracles, self.system, &crafter, tool.as_ref()) {
            Ok(start) => {
                let sound = start
                    .sound
                    .map(|id| format!("0x{id:X}"))
                    .unwrap_or_else(|| "none".to_owned());
                println!(
                    "{} {} may begin (sound {})",
                    style("ALLOWED").bold().green(),
                    self.system,
                    sound
                );
                Ok(())
            }
            Err(RuntimeError::Denied(denial)) => {
                println!(
                    "{} {}: {} (message {})",
                    style("DENIED").bold().red(),
                    self.system,
                    denial,
                    denial.message()
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
