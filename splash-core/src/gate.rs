//! Armed/disarmed gate preventing overlapping trigger sequences.

use portable_atomic::{AtomicBool, Ordering};

/// Mutually-exclusive gate guarding whether a new sequence may start.
///
/// Ownership of the transitions is split across two components by
/// contract: the sequencer calls [`try_disarm`](Self::try_disarm) when
/// it consumes a trigger, and the flash actuator calls
/// [`rearm`](Self::rearm) once its recovery window elapses, so the
/// gate stays closed for the whole sequence span, recovery included.
#[derive(Debug)]
pub struct TriggerGate {
    armed: AtomicBool,
}

impl TriggerGate {
    /// Creates a gate in the armed state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            armed: AtomicBool::new(true),
        }
    }

    /// Atomically consumes the armed state.
    ///
    /// Returns `true` when the caller won the gate and may run a
    /// sequence. Concurrent callers cannot both observe `true`: the
    /// read-modify-write is a single compare-exchange.
    pub fn try_disarm(&self) -> bool {
        self.armed
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Unconditionally rearms the gate.
    pub fn rearm(&self) {
        self.armed.store(true, Ordering::Release);
    }

    /// Returns the current gate state without consuming it.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }
}

impl Default for TriggerGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_armed() {
        let gate = TriggerGate::new();
        assert!(gate.is_armed());
    }

    #[test]
    fn second_disarm_fails_until_rearmed() {
        let gate = TriggerGate::new();
        assert!(gate.try_disarm());
        assert!(!gate.try_disarm());
        assert!(!gate.is_armed());

        gate.rearm();
        assert!(gate.is_armed());
        assert!(gate.try_disarm());
    }

    #[test]
    fn rearm_is_idempotent() {
        let gate = TriggerGate::new();
        gate.rearm();
        gate.rearm();
        assert!(gate.try_disarm());
    }
}
