//! Facility categories and the lookup tables that recognise them.
//!
//! A facility is recognised three ways: by a capability tag on the item's
//! registered type ([`TypeTagRegistry`]), by its art id ([`FacilityTable`]),
//! or by standing inside a legacy always-on zone ([`SpecialRegions`]).
mod error;
mod region;
mod table;
mod tags;

use bitflags::bitflags;

pub use error::TableError;
pub use region::{RegionOverride, SpecialRegions};
pub use table::{ArtRange, FacilityTable};
pub use tags::TypeTagRegistry;

/// The two independent conditions blacksmithing requires.
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
pub enum FacilityKind {
    Anvil,
    Forge,
}

impl FacilityKind {
    pub const fn flag(self) -> FacilityFlags {
        match self {
            FacilityKind::Anvil => FacilityFlags::ANVIL,
            FacilityKind::Forge => FacilityFlags::FORGE,
        }
    }
}

bitflags! {
    /// Capability set of a type, art id or tile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FacilityFlags: u8 {
        const ANVIL = 1 << 0;
        const FORGE = 1 << 1;
    }
}

impl FacilityFlags {
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = FacilityKind>,
    {
        kinds
            .into_iter()
            .fold(Self::empty(), |flags, kind| flags | kind.flag())
    }

    pub fn has(self, kind: FacilityKind) -> bool {
        self.contains(kind.flag())
    }
}

impl From<FacilityKind> for FacilityFlags {
    fn from(kind: FacilityKind) -> Self {
        kind.flag()
    }
}
