//! Buzzer feedback adapter
//!
//! Implements the FeedbackPort trait by toggling a GPIO-driven buzzer:
//! 250 cycles of a 1 ms period square wave, a ~1 kHz tone for a quarter
//! second. The duration is user-facing behavior and stays fixed.

use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::ports::feedback::FeedbackPort;

/// Full on/off cycles per beep.
const BEEP_CYCLES: u32 = 250;
/// Half of the square-wave period.
const BEEP_HALF_PERIOD_US: u64 = 500;

/// GPIO square-wave buzzer.
pub struct Buzzer<'a> {
    pin: Output<'a>,
}

impl<'a> Buzzer<'a> {
    /// Wrap the buzzer output pin (low = silent).
    pub fn new(pin: Output<'a>) -> Self {
        Self { pin }
    }
}

impl<'a> FeedbackPort for Buzzer<'a> {
    async fn beep(&mut self) {
        for _ in 0..BEEP_CYCLES {
            self.pin.set_high();
            Timer::after_micros(BEEP_HALF_PERIOD_US).await;
            self.pin.set_low();
            Timer::after_micros(BEEP_HALF_PERIOD_US).await;
        }
    }
}
