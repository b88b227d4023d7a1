//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_craft;
mod probe;
mod validate;

pub use check_craft::CheckCraft;
pub use probe::Probe;
pub use validate::Validate;
