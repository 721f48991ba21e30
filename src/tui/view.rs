//! Pure rendering: map timer state to a centered ratatui frame.
//!
//! [`frame_text`] builds the whole timer block from state alone and is
//! what the tests pin down. [`render`] only places that block into the
//! terminal frame.

use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::types::{Phase, TimerState};

use super::state::App;
use super::theme;

/// Static heading above the countdown.
pub const TITLE: &str = "BJJ Timer by Shivan";

/// Shown alone once every round is done.
pub const FINISHED: &str = "Finished";

/// Gap between the two halves of the round counter row.
const ROUND_GAP: &str = "  ";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the app into the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let text = frame_text(&app.timer, app.spinner.glyph());
    let height = u16::try_from(text.height()).unwrap_or(u16::MAX);
    let [block] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(frame.area());
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), block);
}

// ============================================================================
// TIMER BLOCK
// ============================================================================

/// The centered timer block for a given state.
///
/// Once the session is finished the block is the finished indicator and
/// nothing else, whatever the remaining fields hold.
pub fn frame_text(state: &TimerState, spinner_glyph: &'static str) -> Text<'static> {
    if state.is_finished() {
        return Text::from(Line::styled(FINISHED, theme::STYLE_FINISHED));
    }

    let countdown = Line::from(vec![
        Span::styled(spinner_glyph, theme::STYLE_SPINNER),
        Span::raw(" Countdown: "),
        Span::styled(format!("{}s", state.countdown_secs), theme::STYLE_COUNTDOWN),
    ]);

    let rounds = Line::from(vec![
        Span::raw(format!("Remaining Rounds: {}", state.remaining_rounds())),
        Span::raw(ROUND_GAP),
        Span::raw(format!("Current Round: {}", state.display_round())),
    ]);

    let phase_style = match state.phase {
        Phase::Active => theme::STYLE_ACTIVE,
        Phase::Resting => theme::STYLE_RESTING,
    };

    Text::from(vec![
        Line::styled(TITLE, theme::STYLE_TITLE),
        countdown,
        rounds,
        Line::styled(state.phase.label(), phase_style),
    ])
}

// ============================================================================
// TESTS
// ============================================================================
