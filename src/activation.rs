//! Stage activation rules and the featured-stage scan.
//!
//! Everything here is a pure function of the calendar data and a reference
//! date; callers decide whether that date is the real one or a simulated
//! override.

use chrono::NaiveDate;

use crate::models::calendar::Calendar;
use crate::models::dates::DateSpec;
use crate::models::stage::Stage;

/// Whether a stage is active on the given reference date.
///
/// Single-date stages have two modes:
/// - end-only: a countdown deadline, active strictly before the end date;
/// - with a start: open-ended from the start date on. An `end` on such a
///   stage is ignored; `check` flags it as an advisory.
///
/// Period stages need a start and are active through the whole end day
/// (inclusive), or indefinitely when the end is absent.
pub fn is_active(stage: &Stage, on: NaiveDate) -> bool {
    let Some(spec) = &stage.dates else {
        return false;
    };

    match spec {
        DateSpec::Single {
            start: None,
            end: Some(end),
        } => on < *end,
        DateSpec::Single {
            start: Some(start), ..
        } => on >= *start,
        DateSpec::Single {
            start: None,
            end: None,
        } => false,
        DateSpec::Period { start: None, .. } => false,
        DateSpec::Period {
            start: Some(start),
            end,
        } => *start <= on && end.is_none_or(|e| on <= e),
    }
}

/// The stage whose featured section owns the hero banner, if any.
///
/// Candidates are the stages that opt into the banner, scanned from the
/// most advanced flow order down; the first active one wins. When none is
/// active the pre-announcement entry (order 0) takes over, provided it
/// opts in, has no start date and its end date has not passed. That last
/// check is end-inclusive, so on the end date itself the banner still
/// shows the pre-announcement even though `is_active` already rejects it.
pub fn find_featured(calendar: &Calendar, on: NaiveDate) -> Option<&Stage> {
    let mut candidates: Vec<&Stage> = calendar
        .etapas
        .iter()
        .filter(|s| s.opts_into_banner())
        .collect();
    candidates.sort_by(|a, b| b.order.cmp(&a.order));

    if let Some(active) = candidates.into_iter().find(|s| is_active(s, on)) {
        return Some(active);
    }

    let first = calendar.stage_zero()?;
    if !first.opts_into_banner() {
        return None;
    }
    match &first.dates {
        Some(spec) if spec.start().is_none() => {
            let end = spec.end()?;
            (on <= end).then_some(first)
        }
        _ => None,
    }
}
