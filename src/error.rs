//! Run-loop failures.
//!
//! The timer logic and the renderer cannot fail. Everything here comes
//! from the host terminal or from the input producers.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum RunError {
    /// Terminal setup, drawing, or restoration failed.
    Terminal(io::Error),

    /// The key reader could not read from the terminal.
    Input(String),

    /// The interrupt-signal listener could not be registered.
    Signals(io::Error),

    /// Every event producer hung up before the user quit.
    Disconnected,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Terminal(e) => write!(f, "Terminal error: {}", e),
            RunError::Signals(e) => write!(f, "Failed to register signal handler: {}", e),
            RunError::Input(msg) => write!(f, "Failed to read input: {}", msg),
            RunError::Disconnected => write!(f, "Event sources closed unexpectedly"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Terminal(e) | RunError::Signals(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Terminal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_errors_become_terminal_errors() {
        let err: RunError = io::Error::new(io::ErrorKind::NotFound, "no tty").into();
        assert!(matches!(err, RunError::Terminal(_)));
        assert_eq!(err.to_string(), "Terminal error: no tty");
        assert!(err.source().is_some());
    }

    #[test]
    fn signal_errors_are_not_reported_as_terminal_errors() {
        let err = RunError::Signals(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "Failed to register signal handler: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn input_error_display() {
        let err = RunError::Input("broken pipe".to_string());
        assert_eq!(err.to_string(), "Failed to read input: broken pipe");
        assert!(err.source().is_none());
    }
}
