//! Status colors derived from connection and gate state.
//!
//! The single status pixel is the only operator feedback channel. Its
//! color is a pure function of `(connected, armed)`, plus one transient
//! just-connected color shown once per connect edge.

/// Colors the status pixel can display.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StatusColor {
    /// Armed and standalone.
    Green,
    /// Armed with a peer connected.
    Yellow,
    /// Sequence in flight, standalone.
    Red,
    /// Sequence in flight with a peer connected.
    Purple,
    /// Transient color shown on the connect edge.
    Blue,
}

impl StatusColor {
    /// Returns the 8-bit RGB triple for this color.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            StatusColor::Green => (0x00, 0x80, 0x00),
            StatusColor::Yellow => (0xFF, 0xFF, 0x00),
            StatusColor::Red => (0xFF, 0x00, 0x00),
            StatusColor::Purple => (0x80, 0x00, 0x80),
            StatusColor::Blue => (0x00, 0x00, 0xFF),
        }
    }
}

/// Derives the steady-state color for the given connection and gate state.
#[must_use]
pub const fn gate_color(connected: bool, armed: bool) -> StatusColor {
    match (connected, armed) {
        (true, true) => StatusColor::Yellow,
        (false, true) => StatusColor::Green,
        (true, false) => StatusColor::Purple,
        (false, false) => StatusColor::Red,
    }
}
