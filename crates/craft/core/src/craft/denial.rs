//! Reasons a craft attempt may not start.

use super::{CraftSystemKind, MessageId};
use crate::detect::FacilityScan;
use crate::error::{ErrorSeverity, ShardError};

/// Why a crafter was refused.
///
/// Every variant maps to the localized message the client shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CraftDenial {
    #[error("tool is missing, deleted or worn out")]
    ToolWornOut,

    #[error("another tool is equipped")]
    MustUseEquippedTool,

    #[error("stonecraft has not been learned")]
    StonecraftNotLearned,

    #[error("tool is not on the crafter's person")]
    ToolNotOnPerson,

    #[error("glassblowing has not been learned")]
    GlassblowingNotLearned,

    #[error("not near a forge")]
    NotNearForge,

    #[error("not near an anvil and forge (anvil: {}, forge: {})", .found.anvil, .found.forge)]
    NotNearAnvilAndForge { found: FacilityScan },

    #[error("{system} is not possible at this location")]
    WrongLocation { system: CraftSystemKind },
}

impl CraftDenial {
    pub const fn message(&self) -> MessageId {
        match self {
            Self::ToolWornOut => MessageId::TOOL_WORN_OUT,
            Self::MustUseEquippedTool => MessageId::MUST_USE_EQUIPPED_TOOL,
            Self::StonecraftNotLearned => MessageId::STONECRAFT_NOT_LEARNED,
            Self::ToolNotOnPerson => MessageId::TOOL_NOT_ON_PERSON,
            Self::GlassblowingNotLearned => MessageId::GLASSBLOWING_NOT_LEARNED,
            Self::NotNearForge => MessageId::NOT_NEAR_FORGE,
            Self::NotNearAnvilAndForge { .. } => MessageId::NOT_NEAR_ANVIL_AND_FORGE,
            Self::WrongLocation { .. } => MessageId::WRONG_LOCATION,
        }
    }
}

impl ShardError for CraftDenial {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StonecraftNotLearned | Self::GlassblowingNotLearned => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ToolWornOut => "CRAFT_TOOL_WORN_OUT",
            Self::MustUseEquippedTool => "CRAFT_MUST_USE_EQUIPPED_TOOL",
            Self::StonecraftNotLearned => "CRAFT_STONECRAFT_NOT_LEARNED",
            Self::ToolNotOnPerson => "CRAFT_TOOL_NOT_ON_PERSON",
            Self::GlassblowingNotLearned => "CRAFT_GLASSBLOWING_NOT_LEARNED",
            Self::NotNearForge => "CRAFT_NOT_NEAR_FORGE",
            Self::NotNearAnvilAndForge { .. } => "CRAFT_NOT_NEAR_ANVIL_AND_FORGE",
            Self::WrongLocation { .. } => "CRAFT_WRONG_LOCATION",
        }
    }
}
