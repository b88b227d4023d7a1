//! Charge counters for fire giant forges.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use craft_core::Serial;

/// Remaining uses per charged forge.
///
/// The set of tracked forges is fixed at load; only the counters change, so
/// many detector calls may decrement concurrently without a lock.
#[derive(Debug, Default)]
pub struct ChargeLedger {
    charges: HashMap<Serial, AtomicU32>,
}

impl ChargeLedger {
    pub fn new(entries: impl IntoIterator<Item = (Serial, u32)>) -> Self {
        Self {
            charges: entries
                .into_iter()
                .map(|(serial, charges)| (serial, AtomicU32::new(charges)))
                .collect(),
        }
    }

    /// Burns one charge and returns what is left.
    ///
    /// Returns `None` for untracked serials and forges already at zero.
    pub fn consume(&self, serial: Serial) -> Option<u32> {
        let counter = self.charges.get(&serial)?;
        counter
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| left.checked_sub(1))
            .ok()
            .map(|before| before - 1)
    }

    pub fn remaining(&self, serial: Serial) -> Option<u32> {
        self.charges
            .get(&serial)
            .map(|counter| counter.load(Ordering::Acquire))
    }

    /// Tracked forge with no charges left.
    pub fn is_depleted(&self, serial: Serial) -> bool {
        self.remaining(serial) == Some(0)
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }
}
