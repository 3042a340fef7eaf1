use anyhow::{Context, Result};

use crate::config::Config;
use crate::reference::ReferenceDate;
use crate::render::report::EvaluationReport;
use crate::render::terminal;
use crate::source::DataSource;

/// Show the evaluated timeline in the terminal, or as a JSON report.
///
/// # Arguments
/// * `source` - Optional data source (path or URL), wins over the config
/// * `date` - Optional reference date override, `YYYY-MM-DD`
/// * `json` - Print the report as pretty JSON instead of the colored view
pub fn execute(source: Option<String>, date: Option<String>, json: bool) -> Result<()> {
    let config = Config::load_current_dir()?;

    let data_source = DataSource::resolve(source.as_deref(), config.data.source.as_deref())?;
    let calendar = data_source
        .load()
        .with_context(|| format!("Failed to load calendar data from {}", data_source.origin()))?;

    let reference = ReferenceDate::resolve(date.as_deref());
    let report = EvaluationReport::build(&calendar, reference, config.page.title.as_deref());

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize the report")?;
        println!("{rendered}");
    } else {
        terminal::print_report(&report);
    }

    Ok(())
}
