//! Oracle access errors.

use crate::error::{ErrorSeverity, ShardError};

/// Errors that occur when a required oracle is missing from the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("MapOracle not available")]
    MapNotAvailable,

    #[error("SightOracle not available")]
    SightNotAvailable,

    #[error("FacilityOracle not available")]
    FacilitiesNotAvailable,
}

impl ShardError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            SightNotAvailable => "ORACLE_SIGHT_NOT_AVAILABLE",
            FacilitiesNotAvailable => "ORACLE_FACILITIES_NOT_AVAILABLE",
        }
    }
}
