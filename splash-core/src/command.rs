//! Manual test-fire command protocol.
//!
//! The command characteristic accepts a fixed two-byte payload: byte 0
//! requests a flash test, byte 1 a camera test, each firing when the
//! byte equals 1. Anything with a different length is ignored without
//! surfacing an error to the peer.

/// Expected length of a manual command payload.
pub const COMMAND_LEN: usize = 2;

/// Decoded manual test-fire request.
///
/// Manual fires post straight to the actuator mailboxes without
/// consulting the trigger gate, so a test fire may interleave with an
/// in-progress automatic sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ManualCommand {
    pub flash: bool,
    pub camera: bool,
}

impl ManualCommand {
    /// Decodes a raw characteristic write.
    ///
    /// Returns `None` for any payload whose length is not exactly
    /// [`COMMAND_LEN`]; the caller drops such writes silently.
    #[must_use]
    pub fn decode(payload: &[u8]) -> Option<Self> {
        if payload.len() != COMMAND_LEN {
            return None;
        }

        Some(Self {
            flash: payload[0] == 1,
            camera: payload[1] == 1,
        })
    }

    /// Returns `true` when the command requests no fire at all.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.flash && !self.camera
    }
}
