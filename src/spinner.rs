//! Decorative line spinner.
//!
//! Animates on its own clock, independent of the timer tick and of
//! pause. The event loop calls [`Spinner::advance`] every
//! [`FRAME_INTERVAL`].

use std::time::Duration;

/// Glyph sequence, one per frame.
pub const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Time between frames (10 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Spinner::default()
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }

    /// Step to the next frame, wrapping.
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }
}
