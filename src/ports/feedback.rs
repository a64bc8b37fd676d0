//! Feedback port - abstraction for the audible confirmation tone
//!
//! The loop only ever asks for one thing: play the fixed feedback tone.
//! The duration and pitch live in the adapter; a quarter-second beep is
//! part of the user-facing behavior.

/// Port for audible feedback.
pub trait FeedbackPort {
    /// Play the fixed feedback tone to completion.
    fn beep(&mut self) -> impl core::future::Future<Output = ()>;
}
