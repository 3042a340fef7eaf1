//! Resolution of the date all evaluation runs against.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::format::format_date;

/// The date a render is evaluated at, plus whether it was overridden.
///
/// Evaluation itself never reaches for the clock; a `ReferenceDate` is
/// resolved once per invocation and passed down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceDate {
    pub date: NaiveDate,
    pub simulated: bool,
}

impl ReferenceDate {
    /// The real current date, local time zone.
    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive(),
            simulated: false,
        }
    }

    pub fn simulated(date: NaiveDate) -> Self {
        Self {
            date,
            simulated: true,
        }
    }

    /// Resolve an optional override string.
    ///
    /// Accepts `YYYY-MM-DD`, or a `YYYY-MM-DDTHH:MM:SS` datetime truncated
    /// to its date. A malformed override logs a warning and falls back to
    /// the real current date rather than failing the run.
    pub fn resolve(overridden: Option<&str>) -> Self {
        match overridden {
            None => Self::today(),
            Some(raw) => match parse_override(raw) {
                Some(date) => Self::simulated(date),
                None => {
                    tracing::warn!(input = raw, "invalid reference date override, using the current date");
                    Self::today()
                }
            },
        }
    }

    /// Indicator line shown next to rendered output.
    pub fn indicator(&self) -> String {
        if self.simulated {
            format!("Fecha simulada: {}", format_date(self.date))
        } else {
            format!("Fecha actual: {}", format_date(self.date))
        }
    }
}

fn parse_override(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
