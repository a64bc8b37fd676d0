//! Voltage-divider measurement domain service
//!
//! Converts an averaged ADC count into the unknown-leg resistance and
//! aggregates everything one cycle produces for rendering and logging.

use heapless::String;

use crate::domain::bands::{decode_bands, ColorBands};
use crate::domain::format::{format_raw_average, format_resistance};
use crate::domain::series::nearest_commercial;

/// Fixed electrical parameters of the divider frontend.
///
/// The unknown resistor forms the low side of a divider against a known
/// reference: `R_x = R_known * avg / (adc_max - avg)`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DividerConfig {
    /// Known reference resistor on the high side of the divider, in ohms.
    pub r_known_ohms: f64,
    /// Full-scale ADC count.
    pub adc_max: u16,
}

impl DividerConfig {
    /// BitDogLab probe frontend: 10 kΩ reference against the 12-bit ADC.
    pub const BITDOGLAB: Self = Self {
        r_known_ohms: 10_000.0,
        adc_max: 4095,
    };

    /// Create a divider config with custom parameters.
    pub const fn new(r_known_ohms: f64, adc_max: u16) -> Self {
        Self { r_known_ohms, adc_max }
    }

    /// Resistance of the unknown leg from an averaged ADC count.
    ///
    /// A saturated average (at or above full scale, i.e. an open probe)
    /// returns the `0.0` no-reading sentinel instead of degenerating into
    /// a division by zero or a negative resistance.
    pub fn resistance_from_average(&self, average: f64) -> f64 {
        let span = f64::from(self.adc_max) - average;
        if span <= 0.0 {
            return 0.0;
        }
        self.r_known_ohms * average / span
    }
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self::BITDOGLAB
    }
}

/// Everything one measurement cycle produces.
///
/// Recomputed from scratch every cycle; nothing here persists.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementReport {
    /// Averaged raw ADC count for the cycle.
    pub raw_average: f64,
    /// Resistance from the divider formula, in ohms; `0.0` when invalid.
    pub measured_ohms: f64,
    /// Nearest E24 commercial value, in ohms; `0.0` when invalid.
    pub commercial_ohms: f64,
    /// Three-band color code of the commercial value.
    pub bands: ColorBands,
    /// Measured value, formatted for the readout.
    pub measured_text: String<16>,
    /// Commercial value, formatted for the readout.
    pub commercial_text: String<16>,
    /// Zero-padded raw average for the diagnostic row.
    pub adc_text: String<8>,
    /// Dash-joined band abbreviations.
    pub bands_text: String<12>,
}

impl MeasurementReport {
    /// Run the numeric pipeline for one averaged sample: convert, match,
    /// decode, format.
    pub fn from_average(raw_average: f64, divider: &DividerConfig) -> Self {
        let measured_ohms = divider.resistance_from_average(raw_average);
        let commercial_ohms = nearest_commercial(measured_ohms);
        let bands = decode_bands(commercial_ohms);
        Self {
            raw_average,
            measured_ohms,
            commercial_ohms,
            bands,
            measured_text: format_resistance(measured_ohms),
            commercial_text: format_resistance(commercial_ohms),
            adc_text: format_raw_average(raw_average),
            bands_text: bands.code_label(),
        }
    }

    /// True when the cycle produced no valid resistance (open or shorted
    /// probe); the readout shows placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.measured_ohms <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_formula() {
        let divider = DividerConfig::BITDOGLAB;
        // Mid-scale: 10000 * 2048 / (4095 - 2048).
        let ohms = divider.resistance_from_average(2048.0);
        assert!((ohms - 10_004.885).abs() < 0.01);
    }

    #[test]
    fn test_divider_degeneracy_maps_to_sentinel() {
        let divider = DividerConfig::BITDOGLAB;
        assert_eq!(divider.resistance_from_average(4095.0), 0.0);
        assert_eq!(divider.resistance_from_average(4200.0), 0.0);
        assert_eq!(divider.resistance_from_average(0.0), 0.0);
    }

    #[test]
    fn test_mid_scale_report() {
        let report = MeasurementReport::from_average(2048.0, &DividerConfig::BITDOGLAB);
        assert!((report.measured_ohms - 10_004.885).abs() < 0.01);
        assert_eq!(report.commercial_ohms, 10_000.0);
        assert_eq!(report.bands, ColorBands { first: 1, second: 0, multiplier: 3 });
        assert_eq!(report.measured_text.as_str(), "10.00kΩ");
        assert_eq!(report.commercial_text.as_str(), "10.00kΩ");
        assert_eq!(report.adc_text.as_str(), "2048");
        assert_eq!(report.bands_text.as_str(), "BN-BK-OG");
        assert!(!report.is_placeholder());
    }

    #[test]
    fn test_measured_and_commercial_texts_can_differ() {
        let report = MeasurementReport::from_average(2050.0, &DividerConfig::BITDOGLAB);
        assert!((report.measured_ohms - 10_024.45).abs() < 0.01);
        assert_eq!(report.measured_text.as_str(), "10.02kΩ");
        assert_eq!(report.commercial_text.as_str(), "10.00kΩ");
    }

    #[test]
    fn test_saturated_report_is_all_placeholder() {
        let report = MeasurementReport::from_average(4095.0, &DividerConfig::BITDOGLAB);
        assert!(report.is_placeholder());
        assert_eq!(report.measured_ohms, 0.0);
        assert_eq!(report.commercial_ohms, 0.0);
        assert_eq!(report.bands, ColorBands::ZERO);
        assert_eq!(report.measured_text.as_str(), "-----");
        assert_eq!(report.commercial_text.as_str(), "-----");
        assert_eq!(report.bands_text.as_str(), "BK-BK-BK");
        assert_eq!(report.adc_text.as_str(), "4095");
    }

    #[test]
    fn test_custom_divider_parameters() {
        let divider = DividerConfig::new(1_000.0, 1023);
        let ohms = divider.resistance_from_average(511.5);
        assert!((ohms - 1_000.0).abs() < 1.0);
    }
}
