//! Drop-timing model shared by firmware and host targets.
//!
//! The controller photographs a falling object: the camera shutter opens
//! when the sensor edge arrives, and the flash fires once the object has
//! fallen the configured height. The delay between the two is plain
//! free-fall physics plus an operator-tuned offset that soaks up shutter
//! and valve latency.

use core::time::Duration;

/// Standard gravity used by the free-fall delay computation.
pub const GRAVITY_M_PER_S2: f64 = 9.81;

/// Width of the camera shutter pulse.
pub const CAMERA_PULSE: Duration = Duration::from_millis(1_000);

/// Width of the flash trigger pulse.
pub const FLASH_PULSE: Duration = Duration::from_millis(15);

/// Cooldown after the flash pulse before the trigger gate rearms.
///
/// This window, not the computed drop delay, is what rate-limits
/// back-to-back sequences.
pub const FLASH_RECOVERY: Duration = Duration::from_millis(2_000);

/// Operator-tunable timing parameters.
///
/// The pair is always replaced wholesale: the config channel never
/// writes one field without the other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimingParameters {
    /// Drop height in meters. Always positive.
    pub height_m: f64,
    /// Signed flash offset in milliseconds. Negative values compensate
    /// for mechanical and shutter latency.
    pub offset_ms: i32,
}

impl TimingParameters {
    /// Compiled-in defaults used when persistent storage has no values.
    pub const DEFAULT: TimingParameters = TimingParameters {
        height_m: 0.80,
        offset_ms: -25,
    };

    /// Creates a parameter pair from explicit values.
    #[must_use]
    pub const fn new(height_m: f64, offset_ms: i32) -> Self {
        Self {
            height_m,
            offset_ms,
        }
    }
}

impl Default for TimingParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the camera-to-flash delay in milliseconds.
///
/// `round(1000 * sqrt(2h / g)) + offset`, clamped into `u32` range.
/// A large negative offset clamps to zero and the flash fires
/// immediately after the camera. The function is total over every pair
/// the config codec accepts: an absurd height saturates at `u32::MAX`
/// milliseconds instead of overflowing.
#[must_use]
pub fn flash_delay_ms(params: &TimingParameters) -> u32 {
    let fall_s = libm::sqrt(2.0 * params.height_m / GRAVITY_M_PER_S2);
    let millis =
        (libm::round(fall_s * 1_000.0) as i64).saturating_add(i64::from(params.offset_ms));
    u32::try_from(millis.max(0)).unwrap_or(u32::MAX)
}
