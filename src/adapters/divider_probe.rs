//! Divider probe adapter
//!
//! Implements the ProbePort trait on the RP2040 ADC channel wired to the
//! voltage-divider node.

use core::sync::atomic::{AtomicU16, Ordering};

use embassy_rp::adc::{Adc, Async, Channel as AdcChannel};

use crate::ports::probe::{ProbeError, ProbePort};

/// ADC probe on the divider node.
///
/// Samples are taken through the async ADC driver; the last raw count is
/// retained for diagnostics.
pub struct DividerProbe<'a> {
    adc: Adc<'a, Async>,
    channel: AdcChannel<'a>,
    last_raw: AtomicU16,
}

impl<'a> DividerProbe<'a> {
    /// Wrap the ADC peripheral and the divider-node channel.
    pub fn new(adc: Adc<'a, Async>, channel: AdcChannel<'a>) -> Self {
        Self {
            adc,
            channel,
            last_raw: AtomicU16::new(0),
        }
    }
}

impl<'a> ProbePort for DividerProbe<'a> {
    async fn read_sample(&mut self) -> Result<u16, ProbeError> {
        let sample = self
            .adc
            .read(&mut self.channel)
            .await
            .map_err(|_| ProbeError::ReadFailed)?;

        self.last_raw.store(sample, Ordering::Relaxed);
        Ok(sample)
    }

    fn last_raw_value(&self) -> Option<u16> {
        Some(self.last_raw.load(Ordering::Relaxed))
    }
}
