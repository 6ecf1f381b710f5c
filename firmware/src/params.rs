//! Shared timing-parameter slot.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use splash_core::timing::TimingParameters;

use crate::sync::SharedRawMutex;

/// Live timing parameters shared between the config channel and the
/// sequencer.
///
/// The config channel replaces the whole pair in one critical section,
/// so a sequencer snapshot can be stale but never torn: it always sees
/// a height/offset pair that was written together. An in-flight
/// sequence keeps the snapshot it started with.
pub struct TimingStore {
    inner: Mutex<SharedRawMutex, Cell<TimingParameters>>,
}

impl TimingStore {
    /// Creates a store seeded with the given parameters.
    #[must_use]
    pub const fn new(initial: TimingParameters) -> Self {
        Self {
            inner: Mutex::new(Cell::new(initial)),
        }
    }

    /// Returns a copy of the current pair.
    pub fn snapshot(&self) -> TimingParameters {
        self.inner.lock(Cell::get)
    }

    /// Replaces both fields atomically.
    pub fn replace(&self, params: TimingParameters) {
        self.inner.lock(|cell| cell.set(params));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_swaps_the_whole_pair() {
        let store = TimingStore::new(TimingParameters::DEFAULT);
        assert_eq!(store.snapshot(), TimingParameters::DEFAULT);

        let updated = TimingParameters::new(1.44, -150);
        store.replace(updated);
        assert_eq!(store.snapshot(), updated);
    }
}
