//! Evaluation walkthrough across a convocatoria cycle
//!
//! One calendar, six reference dates: the featured stage and the active
//! set must follow the published timeline.

use chrono::NaiveDate;

use hitos::activation::{find_featured, is_active};
use hitos::reference::ReferenceDate;
use hitos::render::report::EvaluationReport;

use super::helpers::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn featured_order(json: &str, on: NaiveDate) -> Option<u32> {
    let calendar = parse_calendar(json);
    find_featured(&calendar, on).map(|stage| stage.order)
}

/// Test: the featured stage follows the cycle
#[test]
fn test_featured_stage_follows_the_cycle() {
    // Pre-announcement window, then its own end date via the fallback.
    assert_eq!(featured_order(SAMPLE_CALENDAR, date(2025, 1, 15)), Some(0));
    assert_eq!(featured_order(SAMPLE_CALENDAR, date(2025, 2, 28)), Some(0));

    // Gap: bases are out but nothing opted in is active.
    assert_eq!(featured_order(SAMPLE_CALENDAR, date(2025, 3, 1)), None);

    // Application window, then another gap, then results.
    assert_eq!(featured_order(SAMPLE_CALENDAR, date(2025, 4, 1)), Some(2));
    assert_eq!(featured_order(SAMPLE_CALENDAR, date(2025, 5, 1)), None);
    assert_eq!(featured_order(SAMPLE_CALENDAR, date(2025, 6, 1)), Some(3));
}

/// Test: activation of each stage at the cycle's turning points
#[test]
fn test_active_set_at_turning_points() {
    let calendar = parse_calendar(SAMPLE_CALENDAR);
    let stages = &calendar.etapas;

    let active_orders = |on: NaiveDate| -> Vec<u32> {
        stages
            .iter()
            .filter(|s| is_active(s, on))
            .map(|s| s.order)
            .collect()
    };

    assert_eq!(active_orders(date(2025, 1, 15)), vec![0]);
    assert_eq!(active_orders(date(2025, 3, 1)), vec![1]);
    assert_eq!(active_orders(date(2025, 4, 1)), vec![1, 2]);
    // The period closes on its end date inclusive.
    assert_eq!(active_orders(date(2025, 4, 30)), vec![1, 2]);
    assert_eq!(active_orders(date(2025, 5, 1)), vec![1]);
    assert_eq!(active_orders(date(2025, 6, 1)), vec![1, 3]);
}

/// Test: the JSON report carries the evaluated view
#[test]
fn test_json_report_shape() {
    let calendar = parse_calendar(SAMPLE_CALENDAR);
    let reference = ReferenceDate::simulated(date(2025, 4, 1));
    let report = EvaluationReport::build(&calendar, reference, None);

    let json = serde_json::to_value(&report).expect("Failed to serialize report");

    assert_eq!(json["title"], "Convocatoria de Innovación 2025");
    assert_eq!(json["reference_date"], "2025-04-01");
    assert_eq!(json["simulated"], true);

    assert_eq!(json["featured"]["stage"], "Postulación");
    assert_eq!(json["featured"]["banner"]["kind"], "button");
    assert_eq!(json["featured"]["banner"]["label"], "Postula aquí");
    assert_eq!(json["featured"]["banner"]["external"], true);

    let stages = json["stages"].as_array().expect("stages array");
    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0]["number"], 1);
    assert_eq!(stages[0]["name"], "Bases");
    assert_eq!(stages[0]["date"], "1 de marzo 2025");
    assert_eq!(stages[0]["active"], true);
    assert_eq!(stages[1]["date"], "10 de marzo 2025 al 30 de abril 2025");
    assert_eq!(stages[2]["active"], false);
}

/// Test: a text banner reports its kind
#[test]
fn test_text_banner_in_report() {
    let calendar = parse_calendar(SAMPLE_CALENDAR);
    let reference = ReferenceDate::simulated(date(2025, 6, 1));
    let report = EvaluationReport::build(&calendar, reference, None);

    let json = serde_json::to_value(&report).expect("Failed to serialize report");
    assert_eq!(json["featured"]["stage"], "Resultados");
    assert_eq!(json["featured"]["banner"]["kind"], "text");
    assert_eq!(json["featured"]["banner"]["text"], "Resultados publicados");
}
