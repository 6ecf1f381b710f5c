//! Wire codec for the setup characteristic.
//!
//! The config channel carries ASCII text of the form
//! `"<height_millimeters>#<offset_milliseconds>"`, e.g. `"800#-25"`.
//! Height travels in millimeters so operators can type whole numbers;
//! the controller stores meters internally.

use core::fmt::{self, Write};

use heapless::String;

use crate::timing::TimingParameters;

/// Maximum encoded length of a config payload, with headroom for the
/// widest possible integer renderings.
pub const CONFIG_TEXT_MAX: usize = 40;

/// Reasons a config payload is rejected.
///
/// A rejected payload mutates nothing and persists nothing; the
/// previous parameters stay live.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigParseError {
    /// The payload has no `#` separator.
    MissingSeparator,
    /// The height segment is not a positive finite number.
    InvalidHeight,
    /// The offset segment is not a signed integer.
    InvalidOffset,
}

impl fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigParseError::MissingSeparator => f.write_str("missing '#' separator"),
            ConfigParseError::InvalidHeight => f.write_str("height is not a positive number"),
            ConfigParseError::InvalidOffset => f.write_str("offset is not a signed integer"),
        }
    }
}

/// Encodes the current parameters into the wire text form.
///
/// Height is rendered as integer millimeters (nearest) so the encoding
/// of `(0.80, -25)` is exactly `"800#-25"`.
#[must_use]
pub fn encode(params: &TimingParameters) -> String<CONFIG_TEXT_MAX> {
    let height_mm = libm::round(params.height_m * 1_000.0) as i64;
    let mut text = String::new();
    // CONFIG_TEXT_MAX covers the widest i64/i32 renderings.
    let _ = write!(text, "{height_mm}#{}", params.offset_ms);
    text
}

/// Decodes a config payload into a parameter pair.
///
/// Splits at the first `#`; the first segment parses as a real number
/// of millimeters, the second as a signed integer of milliseconds.
///
/// # Errors
///
/// Returns a [`ConfigParseError`] naming the offending segment. The
/// caller must leave the live parameters untouched on error.
pub fn decode(text: &str) -> Result<TimingParameters, ConfigParseError> {
    let (height_text, offset_text) = text
        .split_once('#')
        .ok_or(ConfigParseError::MissingSeparator)?;

    let height_mm: f64 = height_text
        .trim()
        .parse()
        .map_err(|_| ConfigParseError::InvalidHeight)?;
    if !height_mm.is_finite() || height_mm <= 0.0 {
        return Err(ConfigParseError::InvalidHeight);
    }

    let offset_ms: i32 = offset_text
        .trim()
        .parse()
        .map_err(|_| ConfigParseError::InvalidOffset)?;

    Ok(TimingParameters {
        height_m: height_mm / 1_000.0,
        offset_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_defaults_as_expected_text() {
        let text = encode(&TimingParameters::new(0.80, -25));
        assert_eq!(text.as_str(), "800#-25");
    }

    #[test]
    fn round_trip_preserves_the_pair() {
        let original = TimingParameters::new(0.80, -25);
        let decoded = decode(encode(&original).as_str()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decodes_fractional_millimeters() {
        let params = decode("1440.5#-150").unwrap();
        assert_eq!(params.offset_ms, -150);
        assert!((params.height_m - 1.4405).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_numeric_height() {
        assert_eq!(decode("abc#-25"), Err(ConfigParseError::InvalidHeight));
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(decode("800-25"), Err(ConfigParseError::MissingSeparator));
    }

    #[test]
    fn rejects_non_positive_height() {
        assert_eq!(decode("0#-25"), Err(ConfigParseError::InvalidHeight));
        assert_eq!(decode("-800#-25"), Err(ConfigParseError::InvalidHeight));
    }

    #[test]
    fn rejects_non_numeric_offset() {
        assert_eq!(decode("800#fast"), Err(ConfigParseError::InvalidOffset));
        assert_eq!(decode("800#"), Err(ConfigParseError::InvalidOffset));
    }

    #[test]
    fn splits_at_the_first_separator_only() {
        // A stray second '#' lands in the offset segment and fails there.
        assert_eq!(decode("800#-25#1"), Err(ConfigParseError::InvalidOffset));
    }
}
