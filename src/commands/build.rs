use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::reference::ReferenceDate;
use crate::render::html::{render_page, write_page};
use crate::render::page_title;
use crate::source::DataSource;

/// Output directory when neither `--output` nor the config set one.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Render the timeline page and write it to the output directory.
///
/// # Arguments
/// * `source` - Optional data source (path or URL), wins over the config
/// * `date` - Optional reference date override, `YYYY-MM-DD`
/// * `output` - Optional output directory, wins over the config
pub fn execute(
    source: Option<String>,
    date: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load_current_dir()?;

    let data_source = DataSource::resolve(source.as_deref(), config.data.source.as_deref())?;
    let calendar = data_source
        .load()
        .with_context(|| format!("Failed to load calendar data from {}", data_source.origin()))?;

    let reference = ReferenceDate::resolve(date.as_deref());
    let title = page_title(&calendar, config.page.title.as_deref());
    let output_dir = resolve_output_dir(output, config.page.output.as_deref());

    let html = render_page(&calendar, reference, &title);
    let page_path = write_page(&output_dir, &html)?;

    let listed = calendar.listed_stages().len();
    println!(
        "{} Page written {}",
        "✓".green().bold(),
        page_path.display().to_string().dimmed()
    );
    println!(
        "  {} stage{} listed, data from {}",
        listed.to_string().bold(),
        if listed == 1 { "" } else { "s" },
        data_source.origin().dimmed()
    );
    println!("  📅 {}", reference.indicator().dimmed());

    Ok(())
}

/// `--output` flag, then `page.output` from the config, then `public/`.
fn resolve_output_dir(flag: Option<PathBuf>, configured: Option<&str>) -> PathBuf {
    flag.or_else(|| configured.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}
