//! OhmColorMeter firmware for the BitDogLab (RP2040)
//!
//! Wires the hexagonal pieces to the board and runs the measurement loop.
//!
//! Pin map:
//! - GPIO28 (ADC channel 2): divider probe input
//! - GPIO5: button A, pull-up, pressed = low
//! - GPIO10: buzzer
//! - GPIO14 / GPIO15: I2C1 SDA / SCL, SSD1306 at 0x3C

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig, InterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use ohmmeter::adapters::{ButtonWatcher, Buzzer, DividerProbe, OledDisplay};
use ohmmeter::domain::MeasureRequest;
use ohmmeter::meter::{Meter, MeterConfig};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => InterruptHandler;
});

/// Shared between the button task and the acquisition loop.
static MEASURE_REQUEST: MeasureRequest = MeasureRequest::new();

#[embassy_executor::task]
async fn button_task(watcher: ButtonWatcher<'static>) -> ! {
    watcher.run().await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("OhmColorMeter starting");

    // Divider probe on GPIO28 (ADC channel 2).
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let channel = AdcChannel::new_pin(p.PIN_28, Pull::None);
    let probe = DividerProbe::new(adc, channel);

    // SSD1306 at 0x3C on I2C1: SDA GPIO14, SCL GPIO15, 400 kHz.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = OledDisplay::new(i2c);
    if let Err(error) = display.init() {
        // Keep measuring even headless; cycle logs still go out over RTT.
        warn!("display init failed: {}", error);
    }

    let buzzer = Buzzer::new(Output::new(p.PIN_10, Level::Low));

    // Button A on GPIO5.
    let button = Input::new(p.PIN_5, Pull::Up);
    spawner.must_spawn(button_task(ButtonWatcher::new(button, &MEASURE_REQUEST)));

    let mut meter = Meter::new(probe, display, buzzer, Delay, MeterConfig::default());
    if let Err(error) = meter.show_splash().await {
        warn!("splash render failed: {}", error);
    }
    meter.run(&MEASURE_REQUEST).await
}
