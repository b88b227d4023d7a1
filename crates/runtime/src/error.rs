//! Errors surfaced by the craft runtime.

use craft_core::{CraftDenial, CraftSystemKind, ErrorSeverity, Serial, ShardError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Denied(#[from] CraftDenial),

    #[error("no craft system registered for {kind}")]
    UnknownSystem { kind: CraftSystemKind },

    #[error("craft system {kind} registered twice")]
    DuplicateSystem { kind: CraftSystemKind },

    #[error("item serial {serial} appears in more than one world fixture")]
    DuplicateSerial { serial: Serial },

    #[error("failed to load craft content: {0:#}")]
    Content(anyhow::Error),
}

impl RuntimeError {
    /// The denial behind this error, if the crafter was simply refused.
    pub fn denial(&self) -> Option<&CraftDenial> {
        match self {
            Self::Denied(denial) => Some(denial),
            _ => None,
        }
    }
}

impl ShardError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Denied(denial) => denial.severity(),
            Self::UnknownSystem { .. } | Self::DuplicateSystem { .. } => ErrorSeverity::Internal,
            Self::DuplicateSerial { .. } | Self::Content(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Denied(denial) => denial.error_code(),
            Self::UnknownSystem { .. } => "RUNTIME_UNKNOWN_SYSTEM",
            Self::DuplicateSystem { .. } => "RUNTIME_DUPLICATE_SYSTEM",
            Self::DuplicateSerial { .. } => "RUNTIME_DUPLICATE_SERIAL",
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
