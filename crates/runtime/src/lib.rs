//! Runtime wiring for craft-permission checks.
//!
//! This crate loads craft content into oracle implementations and routes craft
//! attempts through the registered systems. Consumers build an
//! [`OracleManager`] from a data directory, then ask a [`CraftGate`] whether a
//! crafter may begin.
//!
//! Modules are organized by responsibility:
//! - [`oracle`] provides world, sight and facility oracles over loaded content
//! - [`gate`] routes attempts to craft systems and logs their decisions
//! - [`error`] holds the runtime error type
pub mod error;
pub mod gate;
pub mod oracle;

pub use error::{Result, RuntimeError};
pub use gate::{CraftGate, CraftStart};
pub use oracle::{ChargeLedger, FacilityOracleImpl, OracleManager, WorldOracleImpl};
