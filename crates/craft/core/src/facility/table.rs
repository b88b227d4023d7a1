use super::{FacilityFlags, TableError};
use crate::state::ArtId;

/// Inclusive span of art ids sharing one capability set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArtRange {
    pub start: ArtId,
    pub end: ArtId,
    pub flags: FacilityFlags,
}

impl ArtRange {
    pub const fn single(id: u16, flags: FacilityFlags) -> Self {
        Self::span(id, id, flags)
    }

    pub const fn span(start: u16, end: u16, flags: FacilityFlags) -> Self {
        Self {
            start: ArtId(start),
            end: ArtId(end),
            flags,
        }
    }

    pub fn contains(&self, art: ArtId) -> bool {
        art >= self.start && art <= self.end
    }

    fn overlaps(&self, other: &ArtRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

const ANVIL: FacilityFlags = FacilityFlags::ANVIL;
const FORGE: FacilityFlags = FacilityFlags::FORGE;

/// Art ids the shard has always treated as anvils or forges.
const STANDARD_RANGES: [ArtRange; 13] = [
    ArtRange::single(4015, ANVIL),
    ArtRange::single(4016, ANVIL),
    ArtRange::single(0x2DD5, ANVIL),
    ArtRange::single(0x2DD6, ANVIL),
    ArtRange::single(0x2B55, ANVIL),
    ArtRange::single(0x2B57, ANVIL),
    ArtRange::single(0x0FAF, ANVIL),
    ArtRange::single(4017, FORGE),
    ArtRange::span(0x10DE, 0x10E0, FORGE),
    ArtRange::span(6522, 6569, FORGE),
    ArtRange::span(0x544B, 0x544E, FORGE),
    ArtRange::single(0x2DD8, FORGE),
    ArtRange::span(0x197A, 0x1984, FORGE),
];

/// Fire giant forges: dynamic items that burn a charge per use.
const STANDARD_CHARGED_FORGE: ArtRange = ArtRange::span(6896, 6898, FORGE);

/// Art id → facility capability lookup.
///
/// Ranges are kept sorted by start so lookups only walk candidates that
/// begin at or below the queried id. The charged-forge range is kept apart
/// from the allow-list: it only applies to dynamic items, never to statics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacilityTable {
    ranges: Vec<ArtRange>,
    charged: Option<ArtRange>,
}

impl FacilityTable {
    /// Builds a validated table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if a range is inverted or flagless, or if the
    /// charged range overlaps the allow-list.
    pub fn new(ranges: Vec<ArtRange>, charged: Option<ArtRange>) -> Result<Self, TableError> {
        for range in ranges.iter().chain(charged.iter()) {
            if range.start > range.end {
                return Err(TableError::InvertedRange {
                    start: range.start,
                    end: range.end,
                });
            }
            if range.flags.is_empty() {
                return Err(TableError::EmptyRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }

        if let Some(charged) = charged
            && ranges.iter().any(|range| range.overlaps(&charged))
        {
            return Err(TableError::ChargedRangeOverlap {
                start: charged.start,
                end: charged.end,
            });
        }

        Ok(Self::sorted(ranges, charged))
    }

    /// The built-in blacksmithing table.
    pub fn standard() -> Self {
        Self::sorted(STANDARD_RANGES.to_vec(), Some(STANDARD_CHARGED_FORGE))
    }

    pub fn empty() -> Self {
        Self::sorted(Vec::new(), None)
    }

    fn sorted(mut ranges: Vec<ArtRange>, charged: Option<ArtRange>) -> Self {
        ranges.sort_by_key(|range| (range.start, range.end));
        Self { ranges, charged }
    }

    /// Capability set of an art id according to the allow-list.
    pub fn classify(&self, art: ArtId) -> FacilityFlags {
        let candidates = self.ranges.partition_point(|range| range.start <= art);
        self.ranges[..candidates]
            .iter()
            .filter(|range| range.end >= art)
            .fold(FacilityFlags::empty(), |flags, range| flags | range.flags)
    }

    pub fn is_charged_forge(&self, art: ArtId) -> bool {
        self.charged.is_some_and(|range| range.contains(art))
    }

    pub fn ranges(&self) -> &[ArtRange] {
        &self.ranges
    }

    pub fn charged_range(&self) -> Option<ArtRange> {
        self.charged
    }
}

impl Default for FacilityTable {
    fn default() -> Self {
        Self::standard()
    }
}
