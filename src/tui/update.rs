//! Pure state transitions: (TimerState, TimerEvent) → Transition.
//!
//! Dispatch only. What a tick or a pause means is defined on
//! [`TimerState`] itself; this layer pairs each result with the
//! follow-up command the event loop needs.

use tracing::debug;

use crate::timer::TickOutcome;
use crate::types::TimerState;

use super::state::{Command, TimerEvent, Transition};

/// Pure state transition function.
pub fn update(mut state: TimerState, event: &TimerEvent) -> Transition {
    match event {
        TimerEvent::Tick => {
            let outcome = state.tick();
            if !matches!(outcome, TickOutcome::Counted | TickOutcome::Held) {
                debug!(?outcome, round = state.current_round, "phase boundary");
            }
            // Re-armed unconditionally: pause freezes the countdown, not the clock.
            Transition::with(state, Command::ScheduleTick)
        }
        TimerEvent::TogglePause => {
            state.toggle_pause();
            debug!(paused = state.paused, "pause toggled");
            Transition::stay(state)
        }
        TimerEvent::Quit => Transition::with(state, Command::Quit),
    }
}

// ============================================================================
// TESTS
// ============================================================================
