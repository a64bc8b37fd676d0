//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the measurement loop interacts with
//! the hardware collaborators, keeping the loop independent of specific
//! implementations.
//!
//! # Hexagonal Architecture
//!
//! In hexagonal architecture, ports define the "holes" in the hexagon where
//! adapters plug in:
//!
//! - **ProbePort**: how raw divider samples are taken (ADC, mock)
//! - **DisplayPort**: how the readout is rendered (SSD1306, mock)
//! - **FeedbackPort**: how the confirmation tone is played (buzzer, mock)

pub mod display;
pub mod feedback;
pub mod probe;

pub use display::{DisplayError, DisplayPort};
pub use feedback::FeedbackPort;
pub use probe::{ProbeError, ProbePort};
