//! Display port - abstraction for the readout panel
//!
//! The acquisition loop treats the panel as a write-only text surface:
//! queue text at pixel positions, queue the border frame, then commit.
//! There is no read-back.

/// Error type for display operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The bus transfer to the panel failed.
    BusWrite,
}

/// Port for rendering the readout.
///
/// Drawing calls only touch a back buffer; nothing reaches the panel until
/// [`commit`](DisplayPort::commit). Positions are in pixels from the
/// top-left corner of a 128x64 surface.
pub trait DisplayPort {
    /// Clear the back buffer.
    fn clear(&mut self);

    /// Queue `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Queue the screen border frame.
    fn draw_frame(&mut self);

    /// Push the back buffer to the panel.
    fn commit(&mut self) -> Result<(), DisplayError>;
}
