//! OhmColorMeter - E24 resistor meter for the BitDogLab (RP2040)
//!
//! Reads an unknown resistor through a voltage-divider probe, snaps the
//! value to the nearest E24 commercial value, derives the three-band color
//! code, and renders everything on the onboard SSD1306. A debounced button
//! requests a fresh measurement with an audible confirmation beep.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - E24 series matcher, band decoder, value formatter            │
//! │  - DividerConfig conversion, MeasurementReport                  │
//! │  - PressDebouncer / MeasureRequest                              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - ProbePort: sample the divider node                           │
//! │  - DisplayPort: render the readout                              │
//! │  - FeedbackPort: play the confirmation tone                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters (`firmware` feature)                │
//! │  - DividerProbe: RP2040 ADC on GPIO28                           │
//! │  - OledDisplay: SSD1306 over blocking I2C                       │
//! │  - Buzzer / ButtonWatcher: GPIO feedback and input              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The domain layer and the [`meter`] engine are hardware-free and run
//! under plain `cargo test` on the host with mock ports; everything that
//! needs the RP2040 sits behind the `firmware` cargo feature.

#![cfg_attr(not(test), no_std)]

// ============================================================================
// Hexagonal Architecture
// ============================================================================

/// Domain layer - pure measurement logic
pub mod domain;

/// The acquisition engine driving ports through the measurement cycle
pub mod meter;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations (target only)
#[cfg(feature = "firmware")]
pub mod adapters;

// Re-export key domain types
pub use domain::{
    decode_bands, format_resistance, nearest_commercial, BandColor, ColorBands, DividerConfig,
    MeasureRequest, MeasurementReport, PressDebouncer,
};

// Re-export the engine
pub use meter::{Meter, MeterConfig, MeterError};

// Re-export key port traits
pub use ports::{DisplayError, DisplayPort, FeedbackPort, ProbeError, ProbePort};

// Re-export adapters
#[cfg(feature = "firmware")]
pub use adapters::{ButtonWatcher, Buzzer, DividerProbe, OledDisplay};
