//! Shared connection-state flag.

use portable_atomic::{AtomicBool, Ordering};

/// Tracks whether a remote peer is currently connected.
///
/// Written by the transport connect/disconnect callbacks, polled by the
/// link monitor for edge detection, and read by the sequencer and flash
/// actuator when choosing indicator colors.
#[derive(Debug)]
pub struct ConnectionFlag {
    connected: AtomicBool,
}

impl ConnectionFlag {
    /// Creates a flag in the disconnected state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
        }
    }

    /// Records a connect or disconnect.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Release);
    }

    /// Returns the last recorded connection state.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}

impl Default for ConnectionFlag {
    fn default() -> Self {
        Self::new()
    }
}
