//! Round/rest state transitions on [`TimerState`].
//!
//! Pure functions, zero effects. The event loop decides when a tick
//! happens; this module decides what a tick means.

use crate::types::{Phase, TimerConfig, TimerState};

/// What a single tick did. Informational only: the transition itself
/// is fully captured by the mutated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown decremented, phase unchanged.
    Counted,
    /// Paused and not at a phase boundary: nothing moved.
    Held,
    /// Active phase ran out, rest begins.
    EnteredRest,
    /// Rest ran out, the next active round begins (1-based).
    EnteredRound { round: u32 },
    /// Rest ran out and every configured round is done.
    Finished,
}

impl TimerState {
    /// Startup state: nothing completed, countdown at zero so the first
    /// tick crosses a phase boundary.
    pub fn new(config: &TimerConfig) -> Self {
        TimerState {
            paused: false,
            phase: Phase::Active,
            rounds: config.rounds.max(1),
            current_round: 0,
            countdown_secs: 0,
            rest_duration_secs: config.rest_duration_secs,
            round_duration_secs: config.round_duration_secs,
        }
    }

    /// Advance the session by one tick.
    ///
    /// A paused timer does not count down, but a countdown already at or
    /// below zero still crosses its phase boundary.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.paused {
            self.countdown_secs -= 1;
        }

        if self.countdown_secs > 0 {
            return if self.paused {
                TickOutcome::Held
            } else {
                TickOutcome::Counted
            };
        }

        self.phase = self.phase.flip();
        match self.phase {
            Phase::Resting => {
                self.countdown_secs = self.rest_duration_secs;
                TickOutcome::EnteredRest
            }
            Phase::Active => {
                self.current_round = self.current_round.saturating_add(1);
                // Past the last round the countdown is left alone; the
                // finished view never shows it.
                if self.current_round <= self.rounds {
                    self.countdown_secs = self.round_duration_secs;
                }
                if self.is_finished() {
                    TickOutcome::Finished
                } else {
                    TickOutcome::EnteredRound {
                        round: self.display_round(),
                    }
                }
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_resting(&self) -> bool {
        self.phase == Phase::Resting
    }

    /// True once every configured round has been completed.
    pub fn is_finished(&self) -> bool {
        self.current_round >= self.rounds
    }

    pub fn remaining_rounds(&self) -> u32 {
        self.rounds.saturating_sub(self.current_round)
    }

    /// 1-based number of the round in progress.
    pub fn display_round(&self) -> u32 {
        self.current_round.saturating_add(1)
    }
}

// ============================================================================
// TESTS
// ============================================================================
