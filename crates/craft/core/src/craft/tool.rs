//! Tool validation shared by every craft system.

use super::{CraftDenial, Crafter};

/// Observed state of the tool a craft attempt was started with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolState {
    pub deleted: bool,
    pub uses_remaining: i32,
    /// A different crafting tool sits in one of the crafter's hands.
    pub other_tool_equipped: bool,
    /// Carried in the backpack or held.
    pub on_person: bool,
}

impl ToolState {
    /// A fresh tool in the crafter's pack.
    pub const fn in_pack(uses_remaining: i32) -> Self {
        Self {
            deleted: false,
            uses_remaining,
            other_tool_equipped: false,
            on_person: true,
        }
    }

    pub const fn is_worn_out(&self) -> bool {
        self.deleted || self.uses_remaining < 0
    }
}

/// Carpentry base skill needed before stonecraft can be practised.
pub const STONECRAFT_SKILL: f64 = 100.0;

/// Alchemy base skill needed before glassblowing can be practised.
pub const GLASSBLOWING_SKILL: f64 = 100.0;

/// Optional steps of the validation chain.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ToolChecks {
    pub equipped: bool,
    pub stonecraft: bool,
}

/// Runs the tool checks in their fixed order, stopping at the first failure.
pub(crate) fn validate_tool(
    tool: Option<&ToolState>,
    crafter: &Crafter,
    checks: ToolChecks,
) -> Result<(), CraftDenial> {
    let tool = match tool {
        Some(tool) if !tool.is_worn_out() => tool,
        _ => return Err(CraftDenial::ToolWornOut),
    };

    if checks.equipped && tool.other_tool_equipped {
        return Err(CraftDenial::MustUseEquippedTool);
    }

    if checks.stonecraft
        && !(crafter.is_player
            && crafter.masonry_learned
            && crafter.carpentry_base >= STONECRAFT_SKILL)
    {
        return Err(CraftDenial::StonecraftNotLearned);
    }

    if !tool.on_person {
        return Err(CraftDenial::ToolNotOnPerson);
    }

    Ok(())
}
