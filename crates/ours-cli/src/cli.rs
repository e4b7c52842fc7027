//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Weekly timetable renderer for the `ours@2.0` syntax.
///
/// Reads a timetable written in the `ours@2.0` syntax and renders it to an
/// HTML page through the slot and base templates.
#[derive(Debug, Parser)]
#[command(name = "ours", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Timetable source file.
    pub input: PathBuf,

    /// Where to write the rendered page.
    pub output: PathBuf,

    /// Directory holding the templates and stylesheet (default: `templates`).
    pub templates_dir: Option<PathBuf>,
}
