use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::source::DataSource;
use crate::validation::{advisories, validate};

/// Validate a calendar document and report findings.
///
/// Errors fail the command with a non-zero exit; advisories are printed
/// but do not.
pub fn execute(source: Option<String>) -> Result<()> {
    let config = Config::load_current_dir()?;

    let data_source = DataSource::resolve(source.as_deref(), config.data.source.as_deref())?;
    let calendar = data_source
        .load()
        .with_context(|| format!("Failed to load calendar data from {}", data_source.origin()))?;

    println!("{} {}", "Checking".bold(), data_source.origin().dimmed());

    let result = validate(&calendar);
    let notes = advisories(&calendar);

    if let Err(errors) = &result {
        for error in errors {
            println!("  {} {}", "✗".red().bold(), error);
        }
    }
    for note in &notes {
        println!("  {} {}", "!".yellow().bold(), note);
    }

    match result {
        Ok(()) => {
            let stage_count = calendar.etapas.len();
            let advisory_suffix = if notes.is_empty() {
                String::new()
            } else {
                format!(
                    ", {} advisor{}",
                    notes.len(),
                    if notes.len() == 1 { "y" } else { "ies" }
                )
            };
            println!(
                "{} {} stage{} valid{}",
                "✓".green().bold(),
                stage_count.to_string().bold(),
                if stage_count == 1 { "" } else { "s" },
                advisory_suffix
            );
            Ok(())
        }
        Err(errors) => anyhow::bail!(
            "{} validation error{} in {}",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" },
            data_source.origin()
        ),
    }
}
