//! Measure-button adapter
//!
//! Watches the button input for falling edges, debounces them, and raises
//! the shared measurement request flag. Runs as its own task so edge
//! detection never blocks the acquisition loop.

use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::domain::debounce::{MeasureRequest, PressDebouncer};

/// Debounced watcher for the measure button.
pub struct ButtonWatcher<'a> {
    input: Input<'a>,
    debouncer: PressDebouncer,
    request: &'static MeasureRequest,
}

impl<'a> ButtonWatcher<'a> {
    /// Wrap the button input (pull-up, pressed = low) and the request
    /// flag it raises.
    pub fn new(input: Input<'a>, request: &'static MeasureRequest) -> Self {
        Self {
            input,
            debouncer: PressDebouncer::default(),
            request,
        }
    }

    /// Watch for falling edges forever.
    pub async fn run(mut self) -> ! {
        loop {
            self.input.wait_for_falling_edge().await;
            let now_ms = Instant::now().as_millis();
            if self.debouncer.register_edge(now_ms) {
                self.request.raise();
                defmt::debug!("button edge accepted at {} ms", now_ms);
            }
        }
    }
}
