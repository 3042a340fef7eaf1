//! Standalone HTML page generation.
//!
//! The page carries everything inline: evaluated stage states, banner
//! content and stylesheet. Nothing is fetched at view time, so the file
//! can be dropped on any static host as-is.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::activation::{find_featured, is_active};
use crate::format::format_date;
use crate::models::calendar::Calendar;
use crate::models::stage::Stage;
use crate::reference::ReferenceDate;
use crate::render::{banner_for, stage_date_label, Banner};

pub const PAGE_FILE: &str = "index.html";

pub fn render_page(calendar: &Calendar, reference: ReferenceDate, title: &str) -> String {
    let banner = banner_html(calendar, reference);
    let stages = stages_html(calendar, reference);
    let indicator_class = if reference.simulated { "simulated" } else { "real" };
    // The page is static, so the real-date wording records the build
    // moment instead of claiming to know "today".
    let indicator = if reference.simulated {
        reference.indicator()
    } else {
        format!("Generado el {}", format_date(reference.date))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{styles}
    </style>
</head>
<body>
    <header class="hero">
        <h1>{title}</h1>
        <div id="hero-cta">
{banner}        </div>
    </header>
    <main>
        <section class="stages">
            <div id="stages-list">
{stages}            </div>
        </section>
    </main>
    <footer>
        <p id="fecha-seleccionada" class="date-indicator {indicator_class}">📅 {indicator}</p>
    </footer>
</body>
</html>
"#,
        title = html_escape(title),
        styles = STYLES,
        banner = banner,
        stages = stages,
        indicator_class = indicator_class,
        indicator = html_escape(&indicator),
    )
}

/// Write the page as `index.html` under `output_dir`. The content goes
/// through a temp file in the same directory and is moved into place.
pub fn write_page(output_dir: &Path, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;
    let path = output_dir.join(PAGE_FILE);

    let mut file = NamedTempFile::new_in(output_dir)
        .context("Failed to create a temporary file for the page")?;
    file.write_all(html.as_bytes())
        .context("Failed to write the page")?;
    file.persist(&path)
        .with_context(|| format!("Failed to move the page into place: {}", path.display()))?;

    Ok(path)
}

fn banner_html(calendar: &Calendar, reference: ReferenceDate) -> String {
    let Some(stage) = find_featured(calendar, reference.date) else {
        return String::new();
    };
    let Some(featured) = &stage.featured else {
        return String::new();
    };

    match banner_for(featured) {
        Banner::Button {
            label,
            href,
            external,
        } => {
            let target = if external {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(
                "            <a class=\"cta-button\" href=\"{}\"{}>{}</a>\n",
                html_escape(&href),
                target,
                html_escape(&label)
            )
        }
        Banner::Text(text) => format!(
            "            <p class=\"cta-text\">{}</p>\n",
            html_escape(&text)
        ),
    }
}

fn stages_html(calendar: &Calendar, reference: ReferenceDate) -> String {
    let mut out = String::new();
    for (index, stage) in calendar.listed_stages().into_iter().enumerate() {
        out.push_str(&stage_item_html(stage, index + 1, reference));
    }
    out
}

fn stage_item_html(stage: &Stage, number: usize, reference: ReferenceDate) -> String {
    let active = is_active(stage, reference.date);
    let number_class = if active {
        "stage-number"
    } else {
        "stage-number inactive"
    };
    let date_class = if stage.dates.as_ref().is_some_and(|d| d.is_period()) {
        "stage-date period"
    } else {
        "stage-date"
    };

    // The card link only works while the stage is active and has a target.
    let button = match &stage.document_link {
        Some(link) if active => {
            let target = if link.starts_with("http") {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(
                r#"<a class="stage-button active" href="{}"{}>Consultar<span> &gt;</span></a>"#,
                html_escape(link),
                target
            )
        }
        _ => {
            r##"<a class="stage-button disabled" href="#">Consultar<span> &gt;</span></a>"##
                .to_string()
        }
    };

    format!(
        r#"                <div class="stage-item">
                    <div class="{number_class}">{number}</div>
                    <div class="stage-name">{name}</div>
                    <div class="{date_class}">{date}</div>
                    {button}
                </div>
"#,
        number_class = number_class,
        number = number,
        name = html_escape(&stage.name),
        date_class = date_class,
        date = html_escape(&stage_date_label(stage)),
        button = button,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const STYLES: &str = r#"        :root {
            --color-primary: #0b4f9e;
            --color-primary-dark: #083a75;
            --color-accent: #ffb300;
            --color-text: #222;
            --color-muted: #6b7280;
            --color-surface: #f5f7fa;
        }

        * { box-sizing: border-box; }

        body {
            margin: 0;
            font-family: "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            color: var(--color-text);
            background: var(--color-surface);
        }

        .hero {
            background: linear-gradient(135deg, var(--color-primary), var(--color-primary-dark));
            color: #fff;
            padding: 48px 24px 56px;
            text-align: center;
        }

        .hero h1 {
            margin: 0 0 24px;
            font-size: 2rem;
        }

        #hero-cta { min-height: 48px; }

        .cta-button {
            display: inline-block;
            background: var(--color-accent);
            color: #222;
            padding: 12px 32px;
            border-radius: 24px;
            font-weight: 600;
            text-decoration: none;
        }

        .cta-button:hover { filter: brightness(1.05); }

        .cta-text {
            font-size: 1.1rem;
            margin: 0;
        }

        .stages {
            max-width: 760px;
            margin: -32px auto 48px;
            padding: 0 16px;
        }

        .stage-item {
            display: grid;
            grid-template-columns: 48px 1fr auto auto;
            gap: 16px;
            align-items: center;
            background: #fff;
            border-radius: 8px;
            padding: 16px 20px;
            margin-bottom: 12px;
            box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
        }

        .stage-number {
            width: 36px;
            height: 36px;
            border-radius: 50%;
            background: var(--color-primary);
            color: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: 700;
        }

        .stage-number.inactive { background: #c4c9d1; }

        .stage-name { font-weight: 600; }

        .stage-date {
            color: var(--color-muted);
            font-size: 0.95rem;
        }

        .stage-date.period { font-style: italic; }

        .stage-button {
            color: var(--color-primary);
            font-weight: 600;
            text-decoration: none;
            white-space: nowrap;
        }

        .stage-button.disabled {
            color: #b0b4bb;
            pointer-events: none;
        }

        footer {
            text-align: center;
            padding: 24px 0 40px;
        }

        .date-indicator {
            font-size: 0.9rem;
            margin: 0;
        }

        .date-indicator.simulated { color: #ff9800; }
        .date-indicator.real { color: #4caf50; }

        @media (max-width: 560px) {
            .stage-item { grid-template-columns: 40px 1fr; }
            .stage-date, .stage-button { grid-column: 2; }
        }"#;
