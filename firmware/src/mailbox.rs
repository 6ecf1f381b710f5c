//! Single-slot, overwrite-on-send wake signal.
//!
//! This is the only cross-context signaling primitive in the firmware:
//! the sensor edge wakes the sequencer through one, and the sequencer
//! (or a manual test-fire command) wakes each actuator through its own.
//! A post overwrites any unconsumed previous post, so a burst of edges
//! collapses into a single wake rather than a queue.

use embassy_sync::signal::Signal;

use crate::sync::SharedRawMutex;

/// One-slot wake mailbox.
///
/// [`post`](Self::post) is safe from interrupt context and from any
/// task; [`wait`](Self::wait) is only ever called by the single owning
/// worker. No other shared state is synchronized by this primitive.
pub struct FireMailbox {
    slot: Signal<SharedRawMutex, ()>,
}

impl FireMailbox {
    /// Creates an empty mailbox.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
        }
    }

    /// Stores a pending wake, overwriting any unconsumed one.
    pub fn post(&self) {
        self.slot.signal(());
    }

    /// Suspends the owning worker until a post occurs, then clears the
    /// slot.
    pub async fn wait(&self) {
        self.slot.wait().await;
    }

    /// Returns `true` when an unconsumed post is pending.
    pub fn is_pending(&self) -> bool {
        self.slot.signaled()
    }

    /// Drops any pending post without waking anyone.
    pub fn clear(&self) {
        self.slot.reset();
    }
}

impl Default for FireMailbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;

    #[test]
    fn two_posts_coalesce_into_one_wake() {
        let mailbox = FireMailbox::new();
        mailbox.post();
        mailbox.post();

        block_on(mailbox.wait());
        assert!(!mailbox.is_pending());
    }

    #[test]
    fn wait_consumes_the_slot() {
        let mailbox = FireMailbox::new();
        mailbox.post();
        assert!(mailbox.is_pending());

        block_on(mailbox.wait());
        assert!(!mailbox.is_pending());

        mailbox.post();
        assert!(mailbox.is_pending());
    }

    #[test]
    fn clear_drops_a_pending_post() {
        let mailbox = FireMailbox::new();
        mailbox.post();
        mailbox.clear();
        assert!(!mailbox.is_pending());
    }
}
