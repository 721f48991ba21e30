//! TUI color semantics and style constants.
//!
//! - Green: active training, finished
//! - Yellow: resting
//! - Cyan: the spinner

use ratatui::style::{Color, Modifier, Style};

/// Title line.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Spinner glyph.
pub const STYLE_SPINNER: Style = Style::new().fg(Color::Cyan);

/// Countdown value.
pub const STYLE_COUNTDOWN: Style = Style::new().add_modifier(Modifier::BOLD);

/// Phase indicator while training.
pub const STYLE_ACTIVE: Style = Style::new().fg(Color::Green);

/// Phase indicator while resting.
pub const STYLE_RESTING: Style = Style::new().fg(Color::Yellow);

/// Finished indicator.
pub const STYLE_FINISHED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
