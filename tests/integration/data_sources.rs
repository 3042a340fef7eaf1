//! Data source resolution against a real working directory
//!
//! The resolution order is: explicit argument, then `data.source` from
//! `hitos.toml`, then `datos.json` next to the invocation.

use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

use hitos::commands::check;
use hitos::source::{DataSource, SourceError};

use super::helpers::*;

/// Test: datos.json in the working directory is picked up by default
#[test]
#[serial]
fn test_default_file_is_picked_up() {
    let _cwd = TempCwd::new();
    write_file(std::path::Path::new("."), "datos.json", SAMPLE_CALENDAR);

    let source = DataSource::resolve(None, None).expect("Failed to resolve");
    assert_eq!(source, DataSource::Path(PathBuf::from("datos.json")));

    let calendar = source.load().expect("Failed to load");
    assert_eq!(
        calendar.titulo.as_deref(),
        Some("Convocatoria de Innovación 2025")
    );
}

/// Test: nothing to load is a Missing error
#[test]
#[serial]
fn test_missing_source_is_an_error() {
    let _cwd = TempCwd::new();

    let err = DataSource::resolve(None, None).unwrap_err();
    assert!(matches!(err, SourceError::Missing));
}

/// Test: the configured source feeds the commands
#[test]
#[serial]
fn test_config_source_feeds_the_commands() {
    let cwd = TempCwd::new();
    write_file(cwd.path(), "named.json", SAMPLE_CALENDAR);
    write_file(
        cwd.path(),
        "hitos.toml",
        "[data]\nsource = \"named.json\"\n",
    );

    check::execute(None).expect("check should pass on the sample calendar");
}

/// Test: YAML sources load by extension
#[test]
fn test_yaml_source_loads() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let yaml = "\
calendario:
  titulo: Convocatoria YAML
  etapas:
    - orden_en_flujo: 1
      nombre_etapa: Bases
      fecha:
        tipo_fecha: fecha_unica
        fecha_inicio: 01-03-2025
";
    let path = write_file(dir.path(), "cal.yaml", yaml);

    let calendar = DataSource::Path(path).load().expect("Failed to load");
    assert_eq!(calendar.titulo.as_deref(), Some("Convocatoria YAML"));
    assert_eq!(calendar.etapas[0].name, "Bases");
}

/// Test: an unparseable source fails check with the origin named
#[test]
#[serial]
fn test_unparseable_source_names_the_origin() {
    let cwd = TempCwd::new();
    let path = write_file(cwd.path(), "bad.json", "{ this is not json");

    let err = check::execute(Some(path.display().to_string())).unwrap_err();
    assert!(err.to_string().contains("Failed to load calendar data"));
    assert!(err.to_string().contains("bad.json"));
}
