//! SSD1306 readout adapter
//!
//! Implements the DisplayPort trait on a 128x64 SSD1306 panel in buffered
//! graphics mode over a blocking I2C bus. Text is drawn with the 6x10
//! iso-8859-7 font, which carries the ohm glyph.

use embedded_graphics::{
    mono_font::{iso_8859_7::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use ssd1306::{
    mode::{BufferedGraphicsMode, DisplayConfig},
    prelude::*,
    I2CDisplayInterface, Ssd1306,
};

use crate::ports::display::{DisplayError, DisplayPort};

/// Border frame inset one pixel ring inside the panel edge.
const FRAME_TOP_LEFT: Point = Point::new(3, 3);
const FRAME_SIZE: Size = Size::new(122, 60);

/// SSD1306 panel behind the DisplayPort seam.
///
/// Drawing calls touch only the framebuffer; `commit` pushes it over I2C.
pub struct OledDisplay<I: I2c> {
    panel: Ssd1306<I2CInterface<I>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
    text_style: MonoTextStyle<'static, BinaryColor>,
}

impl<I: I2c> OledDisplay<I> {
    /// Wrap a blocking I2C bus. The panel is not initialized until
    /// [`init`](Self::init) runs.
    pub fn new(i2c: I) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self {
            panel,
            text_style: MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
        }
    }

    /// Bring up the controller (charge pump, addressing mode, display on).
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.panel.init().map_err(|_| DisplayError::BusWrite)
    }
}

impl<I: I2c> DisplayPort for OledDisplay<I> {
    fn clear(&mut self) {
        // Framebuffer only; nothing reaches the bus here.
        self.panel.clear(BinaryColor::Off).ok();
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        Text::with_baseline(text, Point::new(x, y), self.text_style, Baseline::Top)
            .draw(&mut self.panel)
            .ok();
    }

    fn draw_frame(&mut self) {
        Rectangle::new(FRAME_TOP_LEFT, FRAME_SIZE)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.panel)
            .ok();
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.panel.flush().map_err(|_| DisplayError::BusWrite)
    }
}
