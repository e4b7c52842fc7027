//! ours CLI library.
//!
//! This crate provides the CLI interface and the template rendering that turns
//! a parsed timetable into an HTML page.

mod cli;
pub mod commands;
mod config;
pub mod render;

pub use cli::Cli;
pub use config::Config;
