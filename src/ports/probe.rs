//! Probe port - abstraction for the analog divider input
//!
//! This trait lets the acquisition loop take raw samples without knowing
//! the specific converter behind the probe node (on-chip ADC, mock, etc.)

/// Error type for probe sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeError {
    /// The converter failed to produce a sample.
    ReadFailed,
}

/// Port for sampling the divider node.
///
/// # Example Implementation
///
/// ```ignore
/// struct DividerProbe<'a> {
///     adc: Adc<'a, Async>,
///     channel: AdcChannel<'a>,
/// }
///
/// impl ProbePort for DividerProbe<'_> {
///     async fn read_sample(&mut self) -> Result<u16, ProbeError> {
///         self.adc
///             .read(&mut self.channel)
///             .await
///             .map_err(|_| ProbeError::ReadFailed)
///     }
/// }
/// ```
pub trait ProbePort {
    /// Take one raw sample in `[0, adc_max]`.
    fn read_sample(&mut self) -> impl core::future::Future<Output = Result<u16, ProbeError>>;

    /// Last raw sample observed (for diagnostics).
    ///
    /// Returns `None` if the probe doesn't retain raw values.
    fn last_raw_value(&self) -> Option<u16> {
        None
    }
}
