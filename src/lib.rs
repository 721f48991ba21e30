//! bjj-timer: round/rest interval timer for the terminal.

pub mod error;
pub mod spinner;
pub mod timer;
pub mod tui;
pub mod types;
