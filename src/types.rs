//! Domain types for bjj-timer.
//!
//! Pure data: configuration defaults, the training phase, and the
//! timer state record. Transition logic lives in [`crate::timer`].

use std::time::Duration;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of training rounds in a session.
pub const DEFAULT_ROUNDS: u32 = 1;

/// Length of an active (training) phase.
pub const DEFAULT_ROUND_DURATION_SECS: i64 = 5;

/// Length of a rest phase.
pub const DEFAULT_REST_DURATION_SECS: i64 = 3;

/// Cadence of the timer tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Session shape. Compiled-in; nothing reads it from the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub rounds: u32,
    pub round_duration_secs: i64,
    pub rest_duration_secs: i64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            rounds: DEFAULT_ROUNDS,
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            rest_duration_secs: DEFAULT_REST_DURATION_SECS,
        }
    }
}

// ============================================================================
// PHASE
// ============================================================================

/// Which half of the round/rest cycle is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Active,
    Resting,
}

impl Phase {
    /// The other phase.
    pub fn flip(self) -> Phase {
        match self {
            Phase::Active => Phase::Resting,
            Phase::Resting => Phase::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Active => "Active",
            Phase::Resting => "Resting",
        }
    }
}

// ============================================================================
// TIMER STATE
// ============================================================================

/// The whole mutable state of a session.
///
/// `countdown_secs` is signed: it can sit at zero or below for the
/// duration of a single tick, before the phase boundary resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub paused: bool,
    pub phase: Phase,
    /// Rounds configured for the session (at least 1).
    pub rounds: u32,
    /// Rounds completed so far.
    pub current_round: u32,
    pub countdown_secs: i64,
    pub rest_duration_secs: i64,
    pub round_duration_secs: i64,
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::new(&TimerConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let config = TimerConfig::default();
        assert_eq!(config.rounds, 1);
        assert_eq!(config.round_duration_secs, 5);
        assert_eq!(config.rest_duration_secs, 3);
    }

    #[test]
    fn phase_flip_is_self_inverse() {
        assert_eq!(Phase::Active.flip(), Phase::Resting);
        assert_eq!(Phase::Resting.flip(), Phase::Active);
        assert_eq!(Phase::Active.flip().flip(), Phase::Active);
    }

    #[test]
    fn phase_labels() {
        assert_eq!(Phase::Active.label(), "Active");
        assert_eq!(Phase::Resting.label(), "Resting");
    }

    #[test]
    fn default_state_starts_before_first_tick() {
        let state = TimerState::default();
        assert!(!state.paused);
        assert_eq!(state.phase, Phase::Active);
        assert_eq!(state.rounds, 1);
        assert_eq!(state.current_round, 0);
        assert_eq!(state.countdown_secs, 0);
        assert_eq!(state.rest_duration_secs, 3);
        assert_eq!(state.round_duration_secs, 5);
    }
}
