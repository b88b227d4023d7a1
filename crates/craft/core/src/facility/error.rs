use crate::error::{ErrorSeverity, ShardError};
use crate::state::{ArtId, ItemTypeId, MapPlane};

/// Errors raised while building facility tables from content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Range start is above its end.
    #[error("art range {start}..={end} is inverted")]
    InvertedRange { start: ArtId, end: ArtId },

    /// The charged-forge range overlaps an allow-list range.
    #[error("charged forge range {start}..={end} overlaps the allow-list")]
    ChargedRangeOverlap { start: ArtId, end: ArtId },

    /// A range was declared without any facility kind.
    #[error("art range {start}..={end} declares no facility kind")]
    EmptyRange { start: ArtId, end: ArtId },

    /// Type was tagged twice.
    #[error("item type {0} already has facility tags")]
    DuplicateTypeTag(ItemTypeId),

    /// Region rectangle has min above max on some axis.
    #[error("region '{label}' on {map} has inverted bounds")]
    MalformedRegion { label: String, map: MapPlane },
}

impl ShardError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use TableError::*;
        match self {
            InvertedRange { .. } => "TABLE_INVERTED_RANGE",
            ChargedRangeOverlap { .. } => "TABLE_CHARGED_RANGE_OVERLAP",
            EmptyRange { .. } => "TABLE_EMPTY_RANGE",
            DuplicateTypeTag(_) => "TABLE_DUPLICATE_TYPE_TAG",
            MalformedRegion { .. } => "TABLE_MALFORMED_REGION",
        }
    }
}
