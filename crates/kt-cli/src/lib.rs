//! Keystroke log reconstruction CLI library.
//!
//! This crate provides the CLI interface for `kt`.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
