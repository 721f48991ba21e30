//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Signal thread (unix): forwards SIGINT/SIGTERM
//!
//! Timers are not threads. The loop keeps two deadlines, the pending
//! tick and the next spinner frame, and waits on the channel until the
//! earlier of the two. Ticks therefore serialize with key events and at
//! most one is ever pending.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::RunError;
use crate::spinner::FRAME_INTERVAL;
use crate::types::{TimerConfig, TICK_INTERVAL};

use super::state::{App, AppEvent, Command, TimerEvent};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a timer event.
///
/// Returns None for keys the timer ignores.
pub fn map_key(key: KeyEvent) -> Option<TimerEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TimerEvent::Quit);
    }

    match key.code {
        KeyCode::Char('p') => Some(TimerEvent::TogglePause),
        KeyCode::Char('q') => Some(TimerEvent::Quit),
        _ => None,
    }
}

// ============================================================================
// DEADLINES
// ============================================================================

/// The loop's two clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    /// When the pending tick fires. None until a transition re-arms it.
    pub tick: Option<Instant>,
    /// When the spinner steps to its next frame.
    pub frame: Instant,
}

impl Deadlines {
    pub fn new(now: Instant) -> Self {
        Deadlines {
            tick: None,
            frame: now + FRAME_INTERVAL,
        }
    }

    pub fn arm_tick(&mut self, now: Instant) {
        self.tick = Some(now + TICK_INTERVAL);
    }

    /// Earliest instant something is due.
    pub fn next(&self) -> Instant {
        match self.tick {
            Some(tick) => tick.min(self.frame),
            None => self.frame,
        }
    }

    /// Disarm and report the tick if it is due.
    pub fn take_tick(&mut self, now: Instant) -> bool {
        match self.tick {
            Some(tick) if tick <= now => {
                self.tick = None;
                true
            }
            _ => false,
        }
    }

    /// Re-arm and report the spinner frame if it is due.
    pub fn take_frame(&mut self, now: Instant) -> bool {
        if self.frame <= now {
            self.frame = now + FRAME_INTERVAL;
            true
        } else {
            false
        }
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Enter raw mode and the alternate screen. Raw mode is undone if any
/// later step fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let terminal = io::stdout()
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    restore_on_err(terminal, restore_terminal)
}

/// Run `restore` (best effort) when `result` is an error, then pass
/// `result` through untouched.
fn restore_on_err<T>(
    result: io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        let _ = restore();
    }
    result
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// PRODUCER THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if tx.send(AppEvent::Key(key)).is_err() {
                    break; // receiver dropped, TUI is shutting down
                }
            }
            Ok(_) => {} // ignore mouse, resize, etc.
            Err(e) => {
                let _ = tx.send(AppEvent::InputFailed(e.to_string()));
                break;
            }
        }
    });
}

/// Spawn a thread that turns SIGINT/SIGTERM into an interrupt event.
#[cfg(unix)]
fn spawn_signal_listener(tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use tracing::debug;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    thread::spawn(move || {
        for signal in signals.forever() {
            debug!(signal, "received signal");
            if tx.send(AppEvent::Interrupt).is_err() {
                break;
            }
        }
    });
    Ok(())
}

#[cfg(not(unix))]
fn spawn_signal_listener(_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    Ok(())
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the timer until the user quits.
///
/// The terminal is restored on every exit path, including errors.
pub fn run(config: TimerConfig) -> Result<(), RunError> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &config);
    let restored = restore_terminal();
    finish(result, restored)
}

/// Combine the loop outcome with terminal restoration. A loop error wins
/// over a restore error.
fn finish(result: Result<(), RunError>, restored: io::Result<()>) -> Result<(), RunError> {
    result.and(restored.map_err(RunError::Terminal))
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &TimerConfig,
) -> Result<(), RunError> {
    let mut app = App::new(config);
    let mut deadlines = Deadlines::new(Instant::now());
    apply(App::init(), &mut app, &mut deadlines);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_signal_listener(tx.clone()).map_err(RunError::Signals)?;
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let timeout = deadlines.next().saturating_duration_since(Instant::now());
        match rx.recv_timeout(timeout) {
            Ok(AppEvent::Key(key)) => {
                if let Some(event) = map_key(key) {
                    dispatch(event, &mut app, &mut deadlines);
                }
            }
            Ok(AppEvent::Interrupt) => dispatch(TimerEvent::Quit, &mut app, &mut deadlines),
            Ok(AppEvent::InputFailed(msg)) => return Err(RunError::Input(msg)),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Err(RunError::Disconnected),
        }

        let now = Instant::now();
        if deadlines.take_tick(now) {
            dispatch(TimerEvent::Tick, &mut app, &mut deadlines);
        }
        if deadlines.take_frame(now) {
            app.spinner.advance();
        }
    }

    Ok(())
}

/// Feed one event through the pure transition and apply its command.
fn dispatch(event: TimerEvent, app: &mut App, deadlines: &mut Deadlines) {
    let transition = update(app.timer, &event);
    app.timer = transition.state;
    if let Some(command) = transition.command {
        apply(command, app, deadlines);
    }
}

fn apply(command: Command, app: &mut App, deadlines: &mut Deadlines) {
    match command {
        Command::ScheduleTick => deadlines.arm_tick(Instant::now()),
        Command::Quit => app.should_quit = true,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(TimerEvent::Quit));
    }

    #[test]
    fn q_maps_to_quit() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(TimerEvent::Quit));
    }

    #[test]
    fn p_maps_to_toggle_pause() {
        assert_eq!(map_key(press(KeyCode::Char('p'))), Some(TimerEvent::TogglePause));
    }

    #[test]
    fn unmapped_keys_return_none() {
        for code in [KeyCode::Char('z'), KeyCode::Char('c'), KeyCode::Enter, KeyCode::Esc] {
            assert_eq!(map_key(press(code)), None);
        }
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn fresh_deadlines_wait_for_frame_only() {
        let now = Instant::now();
        let d = Deadlines::new(now);
        assert_eq!(d.tick, None);
        assert_eq!(d.next(), now + FRAME_INTERVAL);
    }

    #[test]
    fn armed_tick_fires_once() {
        let now = Instant::now();
        let mut d = Deadlines::new(now);
        d.arm_tick(now);
        assert!(!d.take_tick(now));
        let later = now + TICK_INTERVAL;
        assert!(d.take_tick(later));
        assert!(!d.take_tick(later + Duration::from_secs(5)));
    }

    #[test]
    fn next_is_earliest_deadline() {
        let now = Instant::now();
        let mut d = Deadlines::new(now);
        d.arm_tick(now);
        assert_eq!(d.next(), now + FRAME_INTERVAL);
        d.frame = now + Duration::from_secs(10);
        assert_eq!(d.next(), now + TICK_INTERVAL);
    }

    #[test]
    fn frame_rearms_after_firing() {
        let now = Instant::now();
        let mut d = Deadlines::new(now);
        let due = now + FRAME_INTERVAL;
        assert!(d.take_frame(due));
        assert_eq!(d.frame, due + FRAME_INTERVAL);
        assert!(!d.take_frame(due));
    }

    #[test]
    fn restore_runs_only_on_error() {
        let mut restored = false;
        let ok = restore_on_err(Ok(7), || {
            restored = true;
            Ok(())
        });
        assert_eq!(ok.unwrap(), 7);
        assert!(!restored);

        let err: io::Result<()> = restore_on_err(
            Err(io::Error::new(io::ErrorKind::Other, "no alternate screen")),
            || {
                restored = true;
                Err(io::Error::new(io::ErrorKind::Other, "restore failed too"))
            },
        );
        assert!(restored);
        assert_eq!(err.unwrap_err().to_string(), "no alternate screen");
    }

    #[test]
    fn loop_error_wins_over_restore_error() {
        let restore_failed = Err(io::Error::new(io::ErrorKind::Other, "tty gone"));
        let result = finish(Err(RunError::Input("read failed".to_string())), restore_failed);
        assert!(matches!(result, Err(RunError::Input(msg)) if msg == "read failed"));
    }

    #[test]
    fn restore_error_surfaces_after_clean_loop() {
        let result = finish(Ok(()), Err(io::Error::new(io::ErrorKind::Other, "tty gone")));
        assert!(matches!(result, Err(RunError::Terminal(_))));
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn dispatch_tick_rearms_and_quit_sets_flag() {
        let now = Instant::now();
        let mut app = App::new(&TimerConfig::default());
        let mut d = Deadlines::new(now);

        dispatch(TimerEvent::Tick, &mut app, &mut d);
        assert!(d.tick.is_some());
        assert!(app.timer.is_resting());

        dispatch(TimerEvent::TogglePause, &mut app, &mut d);
        assert!(app.timer.paused);
        assert!(!app.should_quit);

        dispatch(TimerEvent::Quit, &mut app, &mut d);
        assert!(app.should_quit);
    }
}
