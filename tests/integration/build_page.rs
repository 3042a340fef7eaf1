//! End-to-end page builds
//!
//! Scaffold a workspace, build the page for several reference dates and
//! check what lands on disk.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use hitos::commands::{build, init};
use hitos::reference::ReferenceDate;
use hitos::render::html::{render_page, write_page};
use hitos::source::DataSource;

use super::helpers::*;

/// Test: init scaffold feeds build without any flags
#[test]
#[serial]
fn test_scaffolded_workspace_builds() {
    let _cwd = TempCwd::new();

    init::execute(false).expect("Failed to scaffold");
    build::execute(None, Some("2025-04-01".to_string()), None).expect("Failed to build");

    let html = fs::read_to_string("public/index.html").expect("Failed to read the page");
    assert!(html.contains("<title>Convocatoria 2025</title>"));
    assert!(html.contains("Postula aquí"));
    assert!(html.contains(r#"class="cta-button""#));
    assert!(html.contains("Fecha simulada: 1 de abril 2025"));
}

/// Test: rebuilding with another date replaces the page content
#[test]
#[serial]
fn test_rebuild_replaces_the_page() {
    let _cwd = TempCwd::new();
    init::execute(false).expect("Failed to scaffold");

    build::execute(None, Some("2025-04-01".to_string()), None).expect("Failed to build");
    let applying = fs::read_to_string("public/index.html").expect("Failed to read the page");
    assert!(applying.contains("Postula aquí"));

    build::execute(None, Some("2025-01-15".to_string()), None).expect("Failed to rebuild");
    let before = fs::read_to_string("public/index.html").expect("Failed to read the page");
    assert!(before.contains("La convocatoria abre el 1 de marzo"));
    assert!(!before.contains("Postula aquí"));
}

/// Test: --output wins over the configured directory
#[test]
#[serial]
fn test_explicit_output_directory() {
    let cwd = TempCwd::new();
    write_file(cwd.path(), "cal.json", SAMPLE_CALENDAR);

    build::execute(
        Some("cal.json".to_string()),
        Some("2025-04-01".to_string()),
        Some(PathBuf::from("site")),
    )
    .expect("Failed to build");

    assert!(cwd.path().join("site/index.html").exists());
    assert!(!cwd.path().join("public").exists());
}

/// Test: no argument, no config, no datos.json is a build error
#[test]
#[serial]
fn test_build_without_any_source_fails() {
    let _cwd = TempCwd::new();

    let err = build::execute(None, None, None).unwrap_err();
    assert!(err.to_string().contains("no calendar data found"));
}

/// Test: file to page flow through the library API
#[test]
fn test_page_flow_from_file_to_disk() {
    let data_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = TempDir::new().expect("Failed to create temp directory");
    let cal_path = write_file(data_dir.path(), "cal.json", SAMPLE_CALENDAR);

    let calendar = DataSource::Path(cal_path).load().expect("Failed to load");
    let reference = ReferenceDate::resolve(Some("2025-06-01"));
    let html = render_page(&calendar, reference, "Convocatoria de Innovación 2025");
    let page = write_page(out_dir.path(), &html).expect("Failed to write the page");

    let written = fs::read_to_string(page).expect("Failed to read the page");
    // Stage order 0 stays off the list, the rest keep flow order.
    assert!(!written.contains("Aviso previo"));
    let bases = written.find("Bases").expect("Bases missing");
    let postulacion = written.find("Postulación").expect("Postulación missing");
    let resultados = written.find("Resultados").expect("Resultados missing");
    assert!(bases < postulacion && postulacion < resultados);
    // By June the results entry owns the banner.
    assert!(written.contains("Resultados publicados"));
}
