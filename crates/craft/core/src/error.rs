//! Common error infrastructure for craft-core.
//!
//! Domain-specific errors (`CraftDenial`, `TableError`, `OracleError`) live
//! next to the rules that raise them. This module holds the shared
//! classification so callers can decide how loudly to report a failure.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Recoverable**: the actor can fix the situation (move closer, equip a tool)
/// - **Validation**: invalid content or input, reject without retry
/// - **Internal**: inconsistent data that needs investigation
/// - **Fatal**: a required collaborator is missing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The actor can retry after changing position, tool, or similar.
    Recoverable,

    /// Invalid input, should not retry without changes.
    Validation,

    /// Unexpected inconsistency in registered data.
    Internal,

    /// A required oracle is unavailable.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all craft-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable; it ends up in logs
pub trait ShardError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_helpers_match_variants() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
