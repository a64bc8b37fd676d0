//! Resistor color-band decoding
//!
//! This module derives the three-band color code (first digit, second
//! digit, power-of-ten multiplier) from a resistance value, and maps
//! band digits to their standard colors.

use core::fmt::Write;

use heapless::String;

/// Color associated with one band digit (0-9).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
}

impl BandColor {
    /// Color for a band digit, `None` when the digit is outside 0-9
    /// (a negative multiplier band has no color in the ten-entry table).
    pub const fn from_digit(digit: i8) -> Option<Self> {
        match digit {
            0 => Some(Self::Black),
            1 => Some(Self::Brown),
            2 => Some(Self::Red),
            3 => Some(Self::Orange),
            4 => Some(Self::Yellow),
            5 => Some(Self::Green),
            6 => Some(Self::Blue),
            7 => Some(Self::Violet),
            8 => Some(Self::Gray),
            9 => Some(Self::White),
            _ => None,
        }
    }

    /// Full color name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Gray => "gray",
            Self::White => "white",
        }
    }

    /// Two-letter IEC abbreviation, as drawn on the readout.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Black => "BK",
            Self::Brown => "BN",
            Self::Red => "RD",
            Self::Orange => "OG",
            Self::Yellow => "YE",
            Self::Green => "GN",
            Self::Blue => "BU",
            Self::Violet => "VT",
            Self::Gray => "GY",
            Self::White => "WH",
        }
    }
}

/// Three-band code: two significant digits and a power-of-ten multiplier.
///
/// The multiplier is kept signed: values below 10 ohms legitimately decode
/// to a negative exponent, which has no color in the three-band table and
/// renders as `--` (see [`ColorBands::code_label`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorBands {
    /// First significant digit, 0-9.
    pub first: u8,
    /// Second significant digit, 0-9.
    pub second: u8,
    /// Power-of-ten multiplier exponent.
    pub multiplier: i8,
}

impl ColorBands {
    /// Sentinel for "no valid reading": all-black bands.
    pub const ZERO: Self = Self {
        first: 0,
        second: 0,
        multiplier: 0,
    };

    /// Color of the first-digit band.
    pub const fn first_color(&self) -> Option<BandColor> {
        BandColor::from_digit(self.first as i8)
    }

    /// Color of the second-digit band.
    pub const fn second_color(&self) -> Option<BandColor> {
        BandColor::from_digit(self.second as i8)
    }

    /// Color of the multiplier band; `None` for exponents outside 0-9.
    pub const fn multiplier_color(&self) -> Option<BandColor> {
        BandColor::from_digit(self.multiplier)
    }

    /// Render the three bands as dash-joined abbreviations, e.g. `BN-BK-OG`.
    ///
    /// Bands without a color (negative multiplier) render as `--`.
    pub fn code_label(&self) -> String<12> {
        let mut out = String::new();
        let _ = write!(
            out,
            "{}-{}-{}",
            abbrev_or_dashes(self.first_color()),
            abbrev_or_dashes(self.second_color()),
            abbrev_or_dashes(self.multiplier_color()),
        );
        out
    }
}

fn abbrev_or_dashes(color: Option<BandColor>) -> &'static str {
    match color {
        Some(color) => color.abbrev(),
        None => "--",
    }
}

/// Decode a resistance value into its three-band color code.
///
/// The value is rendered as decimal text rounded to one fractional digit
/// (fixed-precision `core::fmt` never produces exponent notation) and the
/// digits before the decimal point drive the code: first digit, second
/// digit (0 when absent), and `digit_count - 2` as the multiplier exponent.
/// Rounding comes first so series products that land one ulp below their
/// exact integer (`5.1e2` is `509.99999999999994`) still decode with their
/// final digit intact. Non-positive and non-finite values return the
/// all-black [`ColorBands::ZERO`] sentinel.
///
/// ```
/// use ohmmeter::domain::bands::{decode_bands, ColorBands};
///
/// let bands = decode_bands(470.0);
/// assert_eq!(bands, ColorBands { first: 4, second: 7, multiplier: 1 });
/// ```
pub fn decode_bands(ohms: f64) -> ColorBands {
    if ohms <= 0.0 {
        return ColorBands::ZERO;
    }

    let mut text: String<32> = String::new();
    if write!(text, "{ohms:.1}").is_err() {
        // Out of any plausible range; the rendering did not fit.
        return ColorBands::ZERO;
    }

    let mut first = 0u8;
    let mut second = 0u8;
    let mut count = 0i8;
    for &byte in text.as_bytes() {
        if byte == b'.' {
            break;
        }
        if byte.is_ascii_digit() {
            match count {
                0 => first = byte - b'0',
                1 => second = byte - b'0',
                _ => {}
            }
            count += 1;
        }
    }
    if count == 0 {
        // NaN/inf render without leading digits.
        return ColorBands::ZERO;
    }

    ColorBands {
        first,
        second,
        multiplier: count - 2,
    }
}
