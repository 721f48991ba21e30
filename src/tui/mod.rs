//! Interactive terminal UI.

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
