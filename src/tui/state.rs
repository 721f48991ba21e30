//! TUI state algebra: pure types, zero effects.
//!
//! The timer core understands exactly three events. Everything the
//! terminal produces is narrowed to one of them (or dropped) before it
//! reaches [`super::update::update`].

use crossterm::event::KeyEvent;

use crate::spinner::Spinner;
use crate::types::{TimerConfig, TimerState};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Producers:
/// - A key reader thread sends `Key` and, on failure, `InputFailed`
/// - A signal thread (unix) sends `Interrupt` on SIGINT/SIGTERM
///
/// Timer ticks and spinner frames do not travel through the channel;
/// the loop raises them itself when their deadline passes.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Interrupt,
    InputFailed(String),
}

// ============================================================================
// TIMER EVENTS
// ============================================================================

/// The events the timer state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed.
    Tick,
    /// User pressed the pause key.
    TogglePause,
    /// User asked to leave.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Follow-up requested by a transition. Executed by the effects layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Arm the next tick one interval from now.
    ScheduleTick,
    /// Stop the event loop.
    Quit,
}

/// Result of a pure state transition: the new state plus what the
/// effects layer should do next, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub command: Option<Command>,
}

impl Transition {
    pub fn stay(state: TimerState) -> Self {
        Transition { state, command: None }
    }

    pub fn with(state: TimerState, command: Command) -> Self {
        Transition {
            state,
            command: Some(command),
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub timer: TimerState,

    /// Decoration only. Animates regardless of the timer.
    pub spinner: Spinner,

    /// Set once a Quit command has been applied.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &TimerConfig) -> Self {
        App {
            timer: TimerState::new(config),
            spinner: Spinner::new(),
            should_quit: false,
        }
    }

    /// Command to run before the first event: arm the first tick.
    pub fn init() -> Command {
        Command::ScheduleTick
    }
}

// ============================================================================
// TESTS
// ============================================================================
