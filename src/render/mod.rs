//! Rendering of the evaluated calendar: HTML page, terminal view, JSON
//! report. All three read the same evaluation; none of them mutate it.

pub mod html;
pub mod report;
pub mod terminal;

use crate::format::{format_date, format_range};
use crate::models::calendar::Calendar;
use crate::models::stage::{FeaturedSection, Stage};

/// Title used when neither the config nor the data names one.
pub const DEFAULT_TITLE: &str = "Calendario de la convocatoria";

/// Content of the hero banner region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Button {
        label: String,
        href: String,
        external: bool,
    },
    Text(String),
}

/// Derive the banner content of a featured section: a button when one is
/// requested and a link exists, otherwise the plain text (possibly empty).
pub fn banner_for(featured: &FeaturedSection) -> Banner {
    if featured.has_button {
        if let Some(href) = &featured.button_link {
            return Banner::Button {
                label: featured
                    .button_text
                    .clone()
                    .unwrap_or_else(|| "Ver más".to_string()),
                external: href.starts_with("http"),
                href: href.clone(),
            };
        }
    }
    Banner::Text(featured.text.clone().unwrap_or_default())
}

/// Date cell of a stage card. Periods use the range form and render
/// nothing without a start; single dates show the start, else the end.
pub fn stage_date_label(stage: &Stage) -> String {
    match &stage.dates {
        Some(spec) if spec.is_period() => match spec.start() {
            Some(start) => format_range(start, spec.end()),
            None => String::new(),
        },
        Some(spec) => spec.display_date().map(format_date).unwrap_or_default(),
        None => String::new(),
    }
}

/// Page title: config override first, then the calendar's own title,
/// then the fixed default.
pub fn page_title(calendar: &Calendar, configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .or_else(|| calendar.titulo.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
