//! Acquisition engine - the measurement loop behind the ports
//!
//! One cycle: consume the request flag (beep if it was raised), average a
//! window of raw samples, run the numeric pipeline, render the readout,
//! hold, repeat. Generic over the ports and the delay source so the same
//! loop runs on hardware and under host tests.

use embedded_hal_async::delay::DelayNs;

use crate::domain::debounce::MeasureRequest;
use crate::domain::measurement::{DividerConfig, MeasurementReport};
use crate::ports::display::{DisplayError, DisplayPort};
use crate::ports::feedback::FeedbackPort;
use crate::ports::probe::{ProbeError, ProbePort};

// ============================================================================
// Readout layout (pixels, 128x64 surface, 6x10 font)
// ============================================================================

const TITLE: &str = "OhmColorMeter";
const TITLE_X: i32 = 15;
const TITLE_Y: i32 = 10;

const LABEL_X: i32 = 5;
const VALUE_X: i32 = 55;
const ROW_MEASURED_Y: i32 = 25;
const ROW_NEAREST_Y: i32 = 35;
const ROW_ADC_Y: i32 = 45;
const ROW_BANDS_Y: i32 = 55;

const SPLASH_LINES: [(i32, i32, &str); 4] = [
    (37, 6, "BitDogLab"),
    (22, 16, "Resistor Meter"),
    (25, 28, TITLE),
    (22, 45, "Press button A"),
];

// ============================================================================
// Configuration
// ============================================================================

/// Timing and divider parameters for the measurement loop.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    /// Divider frontend parameters.
    pub divider: DividerConfig,
    /// Raw samples averaged per cycle.
    pub samples_per_cycle: u32,
    /// Pause between consecutive samples, in milliseconds.
    pub sample_interval_ms: u32,
    /// Hold time after each rendered cycle, in milliseconds.
    pub refresh_hold_ms: u32,
    /// Hold time on the startup splash, in milliseconds.
    pub splash_hold_ms: u32,
}

impl MeterConfig {
    /// Stock profile: 500 samples 1 ms apart, 700 ms refresh hold,
    /// 2 s splash.
    pub const DEFAULT: Self = Self {
        divider: DividerConfig::BITDOGLAB,
        samples_per_cycle: 500,
        sample_interval_ms: 1,
        refresh_hold_ms: 700,
        splash_hold_ms: 2000,
    };

    /// Short profile for bench bring-up and tests: a small sample window
    /// and no holds.
    pub const fn fast() -> Self {
        Self {
            divider: DividerConfig::BITDOGLAB,
            samples_per_cycle: 8,
            sample_interval_ms: 0,
            refresh_hold_ms: 0,
            splash_hold_ms: 0,
        }
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error type for a measurement cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeterError {
    /// The probe failed to deliver a sample.
    Probe(ProbeError),
    /// The readout could not be committed.
    Display(DisplayError),
}

impl From<ProbeError> for MeterError {
    fn from(error: ProbeError) -> Self {
        Self::Probe(error)
    }
}

impl From<DisplayError> for MeterError {
    fn from(error: DisplayError) -> Self {
        Self::Display(error)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// The measurement engine: owns the three ports and the delay source.
pub struct Meter<P, D, F, T> {
    probe: P,
    display: D,
    feedback: F,
    delay: T,
    config: MeterConfig,
}

impl<P, D, F, T> Meter<P, D, F, T>
where
    P: ProbePort,
    D: DisplayPort,
    F: FeedbackPort,
    T: DelayNs,
{
    /// Assemble the engine from its collaborators.
    pub fn new(probe: P, display: D, feedback: F, delay: T, config: MeterConfig) -> Self {
        Self {
            probe,
            display,
            feedback,
            delay,
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    /// The probe behind the engine (diagnostics).
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// The display behind the engine.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The feedback source behind the engine.
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Render the startup splash, beep once, and hold.
    pub async fn show_splash(&mut self) -> Result<(), MeterError> {
        self.display.clear();
        self.display.draw_frame();
        for &(x, y, line) in SPLASH_LINES.iter() {
            self.display.draw_text(x, y, line);
        }
        self.display.commit()?;

        self.feedback.beep().await;
        self.delay.delay_ms(self.config.splash_hold_ms).await;
        Ok(())
    }

    /// Run measurement cycles forever, holding between refreshes.
    ///
    /// A failed cycle is logged and skipped; the next cycle starts from a
    /// fresh sample window, so the loop self-heals.
    pub async fn run(&mut self, request: &MeasureRequest) -> ! {
        loop {
            match self.run_cycle(request).await {
                Ok(_report) => {
                    #[cfg(feature = "defmt")]
                    defmt::info!(
                        "cycle: measured {} nearest {} adc {} bands {}",
                        _report.measured_text.as_str(),
                        _report.commercial_text.as_str(),
                        _report.adc_text.as_str(),
                        _report.bands_text.as_str(),
                    );
                }
                Err(_error) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("cycle failed: {}", _error);
                }
            }
            self.delay.delay_ms(self.config.refresh_hold_ms).await;
        }
    }

    /// One full cycle: request consumption, sampling window, numeric
    /// pipeline, render.
    pub async fn run_cycle(
        &mut self,
        request: &MeasureRequest,
    ) -> Result<MeasurementReport, MeterError> {
        if request.take() {
            #[cfg(feature = "defmt")]
            defmt::info!("measurement requested");
            self.feedback.beep().await;
        }

        let average = self.sample_average().await?;
        let report = MeasurementReport::from_average(average, &self.config.divider);
        self.render_reading(&report)?;
        Ok(report)
    }

    /// Collect one sample window and return the running average.
    ///
    /// An empty window averages to `0.0`, the no-signal sentinel.
    async fn sample_average(&mut self) -> Result<f64, MeterError> {
        if self.config.samples_per_cycle == 0 {
            return Ok(0.0);
        }
        let mut sum = 0.0f64;
        for _ in 0..self.config.samples_per_cycle {
            let sample = self.probe.read_sample().await?;
            sum += f64::from(sample);
            self.delay.delay_ms(self.config.sample_interval_ms).await;
        }
        Ok(sum / f64::from(self.config.samples_per_cycle))
    }

    /// Draw the reading screen and push it to the panel.
    fn render_reading(&mut self, report: &MeasurementReport) -> Result<(), MeterError> {
        self.display.clear();
        self.display.draw_frame();
        self.display.draw_text(TITLE_X, TITLE_Y, TITLE);

        self.display.draw_text(LABEL_X, ROW_MEASURED_Y, "Measured");
        self.display
            .draw_text(VALUE_X, ROW_MEASURED_Y, report.measured_text.as_str());

        self.display.draw_text(LABEL_X, ROW_NEAREST_Y, "Nearest");
        self.display
            .draw_text(VALUE_X, ROW_NEAREST_Y, report.commercial_text.as_str());

        self.display.draw_text(LABEL_X, ROW_ADC_Y, "ADC");
        self.display
            .draw_text(VALUE_X, ROW_ADC_Y, report.adc_text.as_str());

        self.display.draw_text(LABEL_X, ROW_BANDS_Y, "Bands");
        self.display
            .draw_text(VALUE_X, ROW_BANDS_Y, report.bands_text.as_str());

        self.display.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::domain::debounce::PressDebouncer;

    #[derive(Default)]
    struct ScriptProbe {
        value: u16,
        reads: usize,
        fail_after: Option<usize>,
    }

    impl ScriptProbe {
        fn constant(value: u16) -> Self {
            Self {
                value,
                ..Self::default()
            }
        }
    }

    impl ProbePort for ScriptProbe {
        async fn read_sample(&mut self) -> Result<u16, ProbeError> {
            if let Some(limit) = self.fail_after {
                if self.reads >= limit {
                    return Err(ProbeError::ReadFailed);
                }
            }
            self.reads += 1;
            Ok(self.value)
        }

        fn last_raw_value(&self) -> Option<u16> {
            Some(self.value)
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        clears: usize,
        frames: usize,
        commits: usize,
        texts: Vec<(i32, i32, String)>,
        fail_commit: bool,
    }

    impl RecordingDisplay {
        fn text_at(&self, x: i32, y: i32) -> Option<&str> {
            self.texts
                .iter()
                .find(|(tx, ty, _)| (*tx, *ty) == (x, y))
                .map(|(_, _, text)| text.as_str())
        }
    }

    impl DisplayPort for RecordingDisplay {
        fn clear(&mut self) {
            self.clears += 1;
            self.texts.clear();
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str) {
            self.texts.push((x, y, text.to_string()));
        }

        fn draw_frame(&mut self) {
            self.frames += 1;
        }

        fn commit(&mut self) -> Result<(), DisplayError> {
            if self.fail_commit {
                return Err(DisplayError::BusWrite);
            }
            self.commits += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingBuzzer {
        beeps: usize,
    }

    impl FeedbackPort for CountingBuzzer {
        async fn beep(&mut self) {
            self.beeps += 1;
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    fn bench_meter(
        probe: ScriptProbe,
    ) -> Meter<ScriptProbe, RecordingDisplay, CountingBuzzer, NoDelay> {
        Meter::new(
            probe,
            RecordingDisplay::default(),
            CountingBuzzer::default(),
            NoDelay,
            MeterConfig::fast(),
        )
    }

    #[test]
    fn test_cycle_renders_mid_scale_reading() {
        let mut meter = bench_meter(ScriptProbe::constant(2048));
        let request = MeasureRequest::new();

        let report = block_on(meter.run_cycle(&request)).unwrap();

        assert!((report.measured_ohms - 10_004.885).abs() < 0.01);
        assert_eq!(report.commercial_ohms, 10_000.0);

        let display = meter.display();
        assert_eq!(display.clears, 1);
        assert_eq!(display.frames, 1);
        assert_eq!(display.commits, 1);
        assert_eq!(display.text_at(TITLE_X, TITLE_Y), Some(TITLE));
        assert_eq!(display.text_at(LABEL_X, ROW_MEASURED_Y), Some("Measured"));
        assert_eq!(display.text_at(VALUE_X, ROW_MEASURED_Y), Some("10.00kΩ"));
        assert_eq!(display.text_at(VALUE_X, ROW_NEAREST_Y), Some("10.00kΩ"));
        assert_eq!(display.text_at(VALUE_X, ROW_ADC_Y), Some("2048"));
        assert_eq!(display.text_at(VALUE_X, ROW_BANDS_Y), Some("BN-BK-OG"));
    }

    #[test]
    fn test_cycle_consumes_the_whole_sample_window() {
        let mut meter = bench_meter(ScriptProbe::constant(1000));
        let request = MeasureRequest::new();

        block_on(meter.run_cycle(&request)).unwrap();

        let window = meter.config().samples_per_cycle as usize;
        assert_eq!(meter.probe().reads, window);
    }

    #[test]
    fn test_debounced_request_beeps_once() {
        let mut meter = bench_meter(ScriptProbe::constant(2048));
        let request = MeasureRequest::new();
        let mut debouncer = PressDebouncer::default();

        // Two edges 100 ms apart: only the first is accepted.
        for now in [1_000, 1_100] {
            if debouncer.register_edge(now) {
                request.raise();
            }
        }

        block_on(meter.run_cycle(&request)).unwrap();
        assert_eq!(meter.feedback().beeps, 1);

        // The flag was consumed; the next cycle stays silent.
        block_on(meter.run_cycle(&request)).unwrap();
        assert_eq!(meter.feedback().beeps, 1);
    }

    #[test]
    fn test_saturated_window_renders_placeholders() {
        let mut meter = bench_meter(ScriptProbe::constant(4095));
        let request = MeasureRequest::new();

        let report = block_on(meter.run_cycle(&request)).unwrap();

        assert!(report.is_placeholder());
        let display = meter.display();
        assert_eq!(display.text_at(VALUE_X, ROW_MEASURED_Y), Some("-----"));
        assert_eq!(display.text_at(VALUE_X, ROW_NEAREST_Y), Some("-----"));
        assert_eq!(display.text_at(VALUE_X, ROW_BANDS_Y), Some("BK-BK-BK"));
    }

    #[test]
    fn test_empty_sample_window_reads_as_no_signal() {
        let mut meter = Meter::new(
            ScriptProbe::constant(2048),
            RecordingDisplay::default(),
            CountingBuzzer::default(),
            NoDelay,
            MeterConfig {
                samples_per_cycle: 0,
                ..MeterConfig::fast()
            },
        );
        let request = MeasureRequest::new();

        let report = block_on(meter.run_cycle(&request)).unwrap();

        assert!(report.is_placeholder());
        assert_eq!(meter.probe().reads, 0);
    }

    #[test]
    fn test_probe_failure_aborts_the_cycle() {
        let probe = ScriptProbe {
            value: 2048,
            fail_after: Some(3),
            ..ScriptProbe::default()
        };
        let mut meter = bench_meter(probe);
        let request = MeasureRequest::new();

        let result = block_on(meter.run_cycle(&request));

        assert_eq!(result.unwrap_err(), MeterError::Probe(ProbeError::ReadFailed));
        assert_eq!(meter.display().commits, 0);
    }

    #[test]
    fn test_commit_failure_surfaces_as_display_error() {
        let mut meter = Meter::new(
            ScriptProbe::constant(2048),
            RecordingDisplay {
                fail_commit: true,
                ..RecordingDisplay::default()
            },
            CountingBuzzer::default(),
            NoDelay,
            MeterConfig::fast(),
        );
        let request = MeasureRequest::new();

        let result = block_on(meter.run_cycle(&request));
        assert_eq!(
            result.unwrap_err(),
            MeterError::Display(DisplayError::BusWrite)
        );
    }

    #[test]
    fn test_splash_draws_and_beeps() {
        let mut meter = bench_meter(ScriptProbe::constant(0));

        block_on(meter.show_splash()).unwrap();

        let display = meter.display();
        assert_eq!(display.frames, 1);
        assert_eq!(display.commits, 1);
        assert!(display
            .texts
            .iter()
            .any(|(_, _, text)| text == "Press button A"));
        assert_eq!(meter.feedback().beeps, 1);
    }
}
