//! Human-readable rendering of resistance values
//!
//! Unit-scaled strings for the readout: ohms below 1 k, two-decimal
//! kilohms and megohms above, dashes when there is no valid reading.

use core::fmt::Write;

use heapless::String;

/// Ohm glyph appended to every formatted value. The 6x10 iso-8859-7 display
/// font carries it; the formatter treats it as an opaque code point.
pub const OHM_GLYPH: char = 'Ω';

/// Placeholder shown when no valid resistance is available.
pub const NO_READING: &str = "-----";

/// Format a resistance in ohms with unit scaling and the ohm glyph.
///
/// Non-positive values produce the [`NO_READING`] placeholder.
///
/// ```
/// use ohmmeter::domain::format::format_resistance;
///
/// assert_eq!(format_resistance(470.0).as_str(), "470.0Ω");
/// assert_eq!(format_resistance(4700.0).as_str(), "4.70kΩ");
/// assert_eq!(format_resistance(0.0).as_str(), "-----");
/// ```
pub fn format_resistance(ohms: f64) -> String<16> {
    let mut out = String::new();
    if ohms <= 0.0 {
        let _ = out.push_str(NO_READING);
        return out;
    }

    let rendered = if ohms >= 1_000_000.0 {
        write!(out, "{:.2}M{OHM_GLYPH}", ohms / 1_000_000.0)
    } else if ohms >= 1_000.0 {
        write!(out, "{:.2}k{OHM_GLYPH}", ohms / 1_000.0)
    } else {
        write!(out, "{ohms:.1}{OHM_GLYPH}")
    };
    if rendered.is_err() {
        // The value did not fit the fixed buffer; fall back to dashes.
        out.clear();
        let _ = out.push_str(NO_READING);
    }
    out
}

/// Format an averaged raw ADC count as a zero-padded four-digit figure.
pub fn format_raw_average(average: f64) -> String<8> {
    let mut out = String::new();
    let _ = write!(out, "{average:04.0}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ohm_range() {
        assert_eq!(format_resistance(470.0).as_str(), "470.0Ω");
        assert_eq!(format_resistance(1.0).as_str(), "1.0Ω");
        assert_eq!(format_resistance(999.9).as_str(), "999.9Ω");
    }

    #[test]
    fn test_kilohm_range() {
        assert_eq!(format_resistance(4700.0).as_str(), "4.70kΩ");
        assert_eq!(format_resistance(1_000.0).as_str(), "1.00kΩ");
        assert_eq!(format_resistance(10_005.87).as_str(), "10.01kΩ");
        assert_eq!(format_resistance(10_000.0).as_str(), "10.00kΩ");
    }

    #[test]
    fn test_megohm_range() {
        assert_eq!(format_resistance(1_200_000.0).as_str(), "1.20MΩ");
        assert_eq!(format_resistance(1_000_000.0).as_str(), "1.00MΩ");
    }

    #[test]
    fn test_placeholder_for_non_positive() {
        assert_eq!(format_resistance(0.0).as_str(), "-----");
        assert_eq!(format_resistance(-10.0).as_str(), "-----");
    }

    #[test]
    fn test_raw_average_is_zero_padded() {
        assert_eq!(format_raw_average(2048.0).as_str(), "2048");
        assert_eq!(format_raw_average(512.0).as_str(), "0512");
        assert_eq!(format_raw_average(7.0).as_str(), "0007");
        assert_eq!(format_raw_average(4095.0).as_str(), "4095");
    }
}
