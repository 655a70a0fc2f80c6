//! Terminal front end for Strictly Minefield.
//!
//! Parses the command line, loads settings, sets up logging and hands a
//! keyboard or scripted input source to the game's turn loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod keyboard;

pub use app::{HELP_TEXT, RunOutcome, run};
pub use cli::Cli;
pub use config::load_settings;
pub use keyboard::{KeyboardInput, translate};
