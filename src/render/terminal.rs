//! Colored terminal view of an evaluation.

use colored::Colorize;

use crate::reference::ReferenceDate;
use crate::render::report::{BannerEntry, EvaluationReport};

pub fn print_report(report: &EvaluationReport) {
    println!("\n{}", report.title.bold());

    if report.stages.is_empty() {
        println!("\n  {}", "No stages to show".dimmed());
    } else {
        println!();
        // Max name length for column alignment
        let max_name_len = report
            .stages
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

        for stage in &report.stages {
            let marker = if stage.active {
                "●".green()
            } else {
                "○".dimmed()
            };
            let padded_name = format!("{:width$}", stage.name, width = max_name_len);
            let name = if stage.active {
                padded_name.normal()
            } else {
                padded_name.dimmed()
            };
            let link = match &stage.link {
                Some(link) if stage.active => format!("  {}", link.cyan()),
                Some(_) => format!("  {}", "(link disabled)".dimmed()),
                None => String::new(),
            };
            println!(
                "  {} {:>2}. {}  {}{}",
                marker,
                stage.number,
                name,
                stage.date.dimmed(),
                link
            );
        }
    }

    println!();
    match &report.featured {
        Some(entry) => {
            let summary = match &entry.banner {
                BannerEntry::Button { label, href, .. } => format!("[{label}] -> {href}"),
                BannerEntry::Text { text } if text.is_empty() => "(empty text)".to_string(),
                BannerEntry::Text { text } => format!("\"{text}\""),
            };
            println!(
                "  {} {}  {}",
                "Banner:".bold(),
                entry.stage.cyan(),
                summary.dimmed()
            );
        }
        None => println!("  {} {}", "Banner:".bold(), "none".dimmed()),
    }

    let reference = ReferenceDate {
        date: report.reference_date,
        simulated: report.simulated,
    };
    let indicator = format!("📅 {}", reference.indicator());
    let colored_indicator = if report.simulated {
        indicator.yellow()
    } else {
        indicator.green()
    };
    println!("  {colored_indicator}\n");
}
