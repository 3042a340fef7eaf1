//! Shared test helpers for the timeline integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use hitos::models::calendar::{Calendar, CalendarDocument};

/// Calendar used by the evaluation walkthroughs: a pre-announcement
/// banner entry, an open-ended single date, a bounded period with a
/// banner button and a results entry with a banner text.
pub const SAMPLE_CALENDAR: &str = r#"{
  "calendario": {
    "titulo": "Convocatoria de Innovación 2025",
    "etapas": [
      {
        "orden_en_flujo": 0,
        "nombre_etapa": "Aviso previo",
        "fecha": {
          "tipo_fecha": "fecha_unica",
          "fecha_inicio": "",
          "fecha_fin": "28-02-2025"
        },
        "seccion_destacada": {
          "mostrar_en_seccion_destacada": true,
          "contiene_boton": false,
          "texto_seccion_destacada": "Abrimos en marzo"
        }
      },
      {
        "orden_en_flujo": 1,
        "nombre_etapa": "Bases",
        "fecha": {
          "tipo_fecha": "fecha_unica",
          "fecha_inicio": "01-03-2025",
          "fecha_fin": ""
        },
        "enlace_documento": "bases.pdf"
      },
      {
        "orden_en_flujo": 2,
        "nombre_etapa": "Postulación",
        "fecha": {
          "tipo_fecha": "periodo",
          "fecha_inicio": "10-03-2025",
          "fecha_fin": "30-04-2025"
        },
        "enlace_documento": "https://example.org/postula",
        "seccion_destacada": {
          "mostrar_en_seccion_destacada": true,
          "contiene_boton": true,
          "enlace_seccion_destacada": "https://example.org/postula",
          "texto_boton_destacado": "Postula aquí"
        }
      },
      {
        "orden_en_flujo": 3,
        "nombre_etapa": "Resultados",
        "fecha": {
          "tipo_fecha": "fecha_unica",
          "fecha_inicio": "15-05-2025",
          "fecha_fin": ""
        },
        "enlace_documento": "resultados.pdf",
        "seccion_destacada": {
          "mostrar_en_seccion_destacada": true,
          "contiene_boton": false,
          "texto_seccion_destacada": "Resultados publicados"
        }
      }
    ]
  }
}"#;

/// Test helper: Parse a calendar document from JSON
pub fn parse_calendar(json: &str) -> Calendar {
    let document: CalendarDocument =
        serde_json::from_str(json).expect("Failed to parse calendar JSON");
    document.calendario
}

/// Test helper: Write a file into a directory and return its path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Test helper: Temporary working directory. Commands resolve their
/// config and the default data file relative to the current directory,
/// so tests using this guard must run `#[serial]`.
pub struct TempCwd {
    original: PathBuf,
    dir: TempDir,
}

impl TempCwd {
    pub fn new() -> Self {
        let original = std::env::current_dir().expect("Failed to read current dir");
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::env::set_current_dir(dir.path()).expect("Failed to enter temp directory");
        TempCwd { original, dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Drop for TempCwd {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}
