//! bjj-timer CLI
//!
//! Full-screen round/rest countdown. Press `p` to pause, `q` to quit.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};

use bjj_timer::tui::run::run;
use bjj_timer::types::TimerConfig;

#[derive(Parser)]
#[command(name = "bjj-timer")]
#[command(about = "Round/rest interval timer for the terminal")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    // Stderr shares the terminal with the alternate screen, so only
    // warnings and errors get through.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    match run(TimerConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
