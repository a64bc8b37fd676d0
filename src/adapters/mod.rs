//! Adapters - concrete implementations of ports
//!
//! Adapters connect the measurement loop to the BitDogLab hardware by
//! implementing the port traits.
//!
//! # Available Adapters
//!
//! - **divider_probe**: on-chip ADC sampling of the divider node
//! - **oled**: SSD1306 128x64 panel over blocking I2C
//! - **buzzer**: GPIO square-wave feedback tone
//! - **button**: debounced measure-button watcher

pub mod button;
pub mod buzzer;
pub mod divider_probe;
pub mod oled;

pub use button::ButtonWatcher;
pub use buzzer::Buzzer;
pub use divider_probe::DividerProbe;
pub use oled::OledDisplay;
