//! Implementation of the timetable conversion.
//!
//! Reads the source file, parses it, renders it through the templates and
//! writes the page in one go, so a failure leaves no partial output behind.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::Config;
use crate::render::{HandlebarsEngine, load_stylesheet, render_timetable};

/// Runs the conversion from `input` to `output` using the configured templates.
pub fn run(input: &Path, output: &Path, config: &Config) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read timetable: {}", input.display()))?;

    let timetable = ours_core::parse(&source)?;
    tracing::info!(
        activities = timetable.len(),
        slots = timetable.slot_count(),
        "parsed timetable"
    );

    let mut engine =
        HandlebarsEngine::from_files(&config.slot_template_path(), &config.base_template_path())?;
    let stylesheet = load_stylesheet(&config.stylesheet_path())?;
    let page = render_timetable(&mut engine, &timetable, stylesheet)
        .context("there was an error while rendering your timetable")?;

    fs::write(output, page)
        .with_context(|| format!("failed to save timetable: {}", output.display()))?;

    println!(
        "Done! Your timetable is available in the file {}",
        output.display()
    );
    Ok(())
}
