//! Craft-permission hooks.
//!
//! Each craft skill decides whether an attempt may start
//! ([`CraftSystem::can_craft`]), which message closes it
//! ([`CraftSystem::ending_message`]) and which sound accompanies it.
//! Blacksmithy additionally requires a nearby anvil and forge, and
//! glassblowing a nearby forge, both checked with the
//! [`ProximityDetector`](crate::detect::ProximityDetector).
mod denial;
mod kind;
mod message;
mod systems;
mod tool;

pub use denial::CraftDenial;
pub use kind::CraftSystemKind;
pub use message::{CraftOutcome, EndingMessage, MessageId, Quality};
pub use systems::{
    Blacksmithy, FORGE_CHECK_DISTANCE, Glassblowing, GodCraft, Masonry, PlainCraft,
    standard_systems,
};
pub use tool::{GLASSBLOWING_SKILL, STONECRAFT_SKILL, ToolState};

use crate::env::CraftEnv;
use crate::state::ActorLocation;

/// The actor attempting a craft.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crafter {
    pub location: ActorLocation,
    pub is_player: bool,
    pub masonry_learned: bool,
    /// Base (unmodified) carpentry skill, in points.
    pub carpentry_base: f64,
    pub glassblowing_learned: bool,
    pub alchemy_base: f64,
}

impl Crafter {
    pub const fn player(location: ActorLocation) -> Self {
        Self {
            location,
            is_player: true,
            masonry_learned: false,
            carpentry_base: 0.0,
            glassblowing_learned: false,
            alchemy_base: 0.0,
        }
    }

    pub const fn with_masonry(mut self, carpentry_base: f64) -> Self {
        self.masonry_learned = true;
        self.carpentry_base = carpentry_base;
        self
    }

    pub const fn with_glassblowing(mut self, alchemy_base: f64) -> Self {
        self.glassblowing_learned = true;
        self.alchemy_base = alchemy_base;
        self
    }

    /// Learned glassblowing with enough alchemy to practise it.
    pub fn can_blow_glass(&self) -> bool {
        self.is_player && self.glassblowing_learned && self.alchemy_base >= GLASSBLOWING_SKILL
    }
}

/// Start and end rules of one craft skill.
pub trait CraftSystem: Send + Sync {
    fn kind(&self) -> CraftSystemKind;

    /// Decides whether `crafter` may start crafting with `tool`.
    ///
    /// # Errors
    ///
    /// Returns the first [`CraftDenial`] in the system's check order.
    fn can_craft(
        &self,
        env: &CraftEnv<'_>,
        crafter: &Crafter,
        tool: Option<&ToolState>,
    ) -> Result<(), CraftDenial>;

    fn ending_message(&self, outcome: &CraftOutcome) -> EndingMessage {
        EndingMessage::resolve(outcome, self.kind().reports_quality())
    }

    fn craft_sound(&self) -> Option<u16> {
        self.kind().sound()
    }
}
