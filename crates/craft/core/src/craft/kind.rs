use crate::state::{MapPlane, Rect};

pub(crate) const GOD_SMITHING_AREA: Rect = Rect::new(1104, 1125, 1960, 1978);
pub(crate) const GOD_SEWING_AREA: Rect = Rect::new(1087, 1105, 1968, 1982);
pub(crate) const GOD_BREWING_AREA: Rect = Rect::new(1098, 1121, 1908, 1931);

/// Craft skills whose start conditions are enforced here.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CraftSystemKind {
    Blacksmithy,
    Tailoring,
    Carpentry,
    Cooking,
    BowFletching,
    Masonry,
    Glassblowing,
    GodSmithing,
    GodSewing,
    GodBrewing,
}

impl CraftSystemKind {
    /// Sound played when a craft attempt starts, if any.
    pub const fn sound(self) -> Option<u16> {
        match self {
            Self::Blacksmithy | Self::GodSmithing => Some(0x541),
            Self::Tailoring | Self::GodSewing => Some(0x248),
            Self::Carpentry => Some(0x23D),
            Self::BowFletching => Some(0x55),
            Self::Masonry => Some(0x65A),
            Self::Glassblowing => Some(0x2B),
            Self::GodBrewing => Some(0x242),
            Self::Cooking => None,
        }
    }

    /// Whether an equipped tool must be the one used.
    pub const fn requires_equipped_tool(self) -> bool {
        matches!(self, Self::Blacksmithy | Self::Masonry | Self::Glassblowing)
    }

    /// Whether the result message reflects item quality.
    pub const fn reports_quality(self) -> bool {
        !self.is_god_craft()
    }

    pub const fn is_god_craft(self) -> bool {
        matches!(self, Self::GodSmithing | Self::GodSewing | Self::GodBrewing)
    }

    /// Workshop a god craft is restricted to: plane plus exclusive bounds.
    pub const fn god_area(self) -> Option<(MapPlane, Rect)> {
        match self {
            Self::GodSmithing => Some((MapPlane::TerMur, GOD_SMITHING_AREA)),
            Self::GodSewing => Some((MapPlane::TerMur, GOD_SEWING_AREA)),
            Self::GodBrewing => Some((MapPlane::TerMur, GOD_BREWING_AREA)),
            _ => None,
        }
    }
}
