//! Concrete craft systems.

use super::kind::{GOD_BREWING_AREA, GOD_SEWING_AREA, GOD_SMITHING_AREA};
use super::tool::{ToolChecks, validate_tool};
use super::{CraftDenial, CraftSystem, CraftSystemKind, Crafter, ToolState};
use crate::detect::ProximityDetector;
use crate::env::CraftEnv;
use crate::state::{MapPlane, Rect};

/// Smithing at an anvil and forge.
#[derive(Clone, Debug)]
pub struct Blacksmithy {
    detector: ProximityDetector,
}

impl Blacksmithy {
    pub fn new(detector: ProximityDetector) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &ProximityDetector {
        &self.detector
    }
}

impl Default for Blacksmithy {
    fn default() -> Self {
        Self::new(ProximityDetector::standard())
    }
}

impl CraftSystem for Blacksmithy {
    fn kind(&self) -> CraftSystemKind {
        CraftSystemKind::Blacksmithy
    }

    fn can_craft(
        &self,
        env: &CraftEnv<'_>,
        crafter: &Crafter,
        tool: Option<&ToolState>,
    ) -> Result<(), CraftDenial> {
        validate_tool(
            tool,
            crafter,
            ToolChecks {
                equipped: true,
                stonecraft: false,
            },
        )?;

        let found = self.detector.detect_nearby(env, crafter.location);
        if found.is_complete() {
            Ok(())
        } else {
            Err(CraftDenial::NotNearAnvilAndForge { found })
        }
    }
}

/// Box radius glassblowers search for a forge.
pub const FORGE_CHECK_DISTANCE: u32 = 2;

/// Glass crafting; needs the learned skill and a forge in reach.
///
/// Only the forge half of the scan matters here, an anvil is irrelevant.
#[derive(Clone, Debug)]
pub struct Glassblowing {
    detector: ProximityDetector,
}

impl Glassblowing {
    pub fn new(detector: ProximityDetector) -> Self {
        Self { detector }
    }
}

impl Default for Glassblowing {
    fn default() -> Self {
        Self::new(ProximityDetector::standard())
    }
}

impl CraftSystem for Glassblowing {
    fn kind(&self) -> CraftSystemKind {
        CraftSystemKind::Glassblowing
    }

    fn can_craft(
        &self,
        env: &CraftEnv<'_>,
        crafter: &Crafter,
        tool: Option<&ToolState>,
    ) -> Result<(), CraftDenial> {
        validate_tool(
            tool,
            crafter,
            ToolChecks {
                equipped: true,
                stonecraft: false,
            },
        )?;

        if !crafter.can_blow_glass() {
            return Err(CraftDenial::GlassblowingNotLearned);
        }

        let found = self
            .detector
            .detect(env, crafter.location, FORGE_CHECK_DISTANCE);
        if found.forge {
            Ok(())
        } else {
            Err(CraftDenial::NotNearForge)
        }
    }
}

/// Stonecrafting; gated on the learned skill.
#[derive(Clone, Copy, Debug, Default)]
pub struct Masonry;

impl CraftSystem for Masonry {
    fn kind(&self) -> CraftSystemKind {
        CraftSystemKind::Masonry
    }

    fn can_craft(
        &self,
        _env: &CraftEnv<'_>,
        crafter: &Crafter,
        tool: Option<&ToolState>,
    ) -> Result<(), CraftDenial> {
        validate_tool(
            tool,
            crafter,
            ToolChecks {
                equipped: true,
                stonecraft: true,
            },
        )
    }
}

/// Crafts restricted to a workshop on a specific plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GodCraft {
    kind: CraftSystemKind,
    plane: MapPlane,
    area: Rect,
}

impl GodCraft {
    /// Returns `None` for kinds without a workshop.
    pub const fn new(kind: CraftSystemKind) -> Option<Self> {
        match kind.god_area() {
            Some((plane, area)) => Some(Self { kind, plane, area }),
            None => None,
        }
    }

    pub const fn smithing() -> Self {
        Self::fixed(CraftSystemKind::GodSmithing, GOD_SMITHING_AREA)
    }

    pub const fn sewing() -> Self {
        Self::fixed(CraftSystemKind::GodSewing, GOD_SEWING_AREA)
    }

    pub const fn brewing() -> Self {
        Self::fixed(CraftSystemKind::GodBrewing, GOD_BREWING_AREA)
    }

    const fn fixed(kind: CraftSystemKind, area: Rect) -> Self {
        Self {
            kind,
            plane: MapPlane::TerMur,
            area,
        }
    }

    pub const fn area(&self) -> Rect {
        self.area
    }
}

impl CraftSystem for GodCraft {
    fn kind(&self) -> CraftSystemKind {
        self.kind
    }

    fn can_craft(
        &self,
        _env: &CraftEnv<'_>,
        crafter: &Crafter,
        tool: Option<&ToolState>,
    ) -> Result<(), CraftDenial> {
        validate_tool(tool, crafter, ToolChecks::default())?;

        let at = crafter.location;
        if at.map == Some(self.plane) && self.area.contains_exclusive(at.position.x, at.position.y)
        {
            Ok(())
        } else {
            Err(CraftDenial::WrongLocation { system: self.kind })
        }
    }
}

/// Crafts that only need a usable tool on the crafter's person.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlainCraft {
    kind: CraftSystemKind,
}

impl PlainCraft {
    pub const fn tailoring() -> Self {
        Self {
            kind: CraftSystemKind::Tailoring,
        }
    }

    pub const fn carpentry() -> Self {
        Self {
            kind: CraftSystemKind::Carpentry,
        }
    }

    pub const fn cooking() -> Self {
        Self {
            kind: CraftSystemKind::Cooking,
        }
    }

    pub const fn bow_fletching() -> Self {
        Self {
            kind: CraftSystemKind::BowFletching,
        }
    }
}

impl CraftSystem for PlainCraft {
    fn kind(&self) -> CraftSystemKind {
        self.kind
    }

    fn can_craft(
        &self,
        _env: &CraftEnv<'_>,
        crafter: &Crafter,
        tool: Option<&ToolState>,
    ) -> Result<(), CraftDenial> {
        validate_tool(tool, crafter, ToolChecks::default())
    }
}

/// One instance of every supported craft system.
pub fn standard_systems(detector: ProximityDetector) -> Vec<Box<dyn CraftSystem>> {
    vec![
        Box::new(Blacksmithy::new(detector.clone())),
        Box::new(PlainCraft::tailoring()),
        Box::new(PlainCraft::carpentry()),
        Box::new(PlainCraft::cooking()),
        Box::new(PlainCraft::bow_fletching()),
        Box::new(Masonry),
        Box::new(Glassblowing::new(detector)),
        Box::new(GodCraft::smithing()),
        Box::new(GodCraft::sewing()),
        Box::new(GodCraft::brewing()),
    ]
}
