//! Spanish date formatting for rendered output.

use chrono::{Datelike, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// `"5 de marzo 2024"`: unpadded day, lowercase month name, full year.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} de {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Range form used for period stages.
///
/// Collapses to a single date when the end is absent or equal to the
/// start, and to `"5 al 9 de marzo 2024"` when both fall in the same
/// month of the same year. Everything else spells out both dates.
pub fn format_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let Some(end) = end else {
        return format_date(start);
    };
    if end == start {
        return format_date(start);
    }
    if start.year() == end.year() && start.month() == end.month() {
        return format!(
            "{} al {} de {} {}",
            start.day(),
            end.day(),
            MONTHS[start.month0() as usize],
            start.year()
        );
    }
    format!("{} al {}", format_date(start), format_date(end))
}
