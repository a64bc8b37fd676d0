//! Domain layer - pure measurement logic independent of hardware
//!
//! Everything here runs unchanged on the host and on the target: the E24
//! series matcher, the color-band decoder, the value formatter, the
//! divider conversion, and the button debounce policy.

pub mod bands;
pub mod debounce;
pub mod format;
pub mod measurement;
pub mod series;

pub use bands::{decode_bands, BandColor, ColorBands};
pub use debounce::{MeasureRequest, PressDebouncer, DEBOUNCE_WINDOW_MS};
pub use format::{format_raw_average, format_resistance, NO_READING, OHM_GLYPH};
pub use measurement::{DividerConfig, MeasurementReport};
pub use series::{nearest_commercial, E24};
