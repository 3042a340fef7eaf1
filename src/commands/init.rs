use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::CONFIG_FILE;
use crate::source::DEFAULT_FILE;

/// Scaffold a working directory: `hitos.toml` plus a sample `datos.json`
/// that renders a full demo timeline.
///
/// # Arguments
/// * `force` - Overwrite existing files instead of failing
pub fn execute(force: bool) -> Result<()> {
    print_header();

    println!("\n{}", "Scaffold".bold());
    println!("{}", "─".repeat(40).dimmed());

    let targets = [
        (Path::new(CONFIG_FILE), SAMPLE_CONFIG),
        (Path::new(DEFAULT_FILE), SAMPLE_DATA),
    ];

    if !force {
        for (path, _) in &targets {
            if path.exists() {
                anyhow::bail!(
                    "{} already exists, pass --force to overwrite it",
                    path.display()
                );
            }
        }
    }

    for (path, content) in &targets {
        write_scaffold_file(path, content)?;
    }

    print_summary();
    Ok(())
}

fn write_scaffold_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "  {} Created {}",
        "✓".green().bold(),
        path.display().to_string().dimmed()
    );
    Ok(())
}

fn print_header() {
    println!("{}", crate::LOGO.cyan());
    println!();
    println!("{}", "╭──────────────────────────────────────╮".cyan());
    println!("{}", "│       Initializing hitos...          │".cyan().bold());
    println!("{}", "╰──────────────────────────────────────╯".cyan());
}

fn print_summary() {
    println!();
    println!("{}", "═".repeat(40).dimmed());
    println!("{} Workspace ready", "✓".green().bold());
    println!();
    println!("{}", "Next steps:".bold());
    println!(
        "  {}  Show the timeline in the terminal",
        "hitos preview".cyan()
    );
    println!("  {}    Write public/index.html", "hitos build".cyan());
    println!("  {}    Validate the calendar data", "hitos check".cyan());
    println!();
}

const SAMPLE_CONFIG: &str = r#"# hitos configuration
[page]
title = "Convocatoria 2025"
output = "public"

[data]
source = "datos.json"
"#;

/// Demo calendar: a pre-announcement banner, then a full application
/// cycle. Empty strings mirror the published data files, where absent
/// values are written as `""`.
const SAMPLE_DATA: &str = r#"{
  "calendario": {
    "titulo": "Convocatoria 2025",
    "etapas": [
      {
        "orden_en_flujo": 0,
        "nombre_etapa": "Pre-convocatoria",
        "fecha": {
          "tipo_fecha": "fecha_unica",
          "fecha_inicio": "",
          "fecha_fin": "28-02-2025"
        },
        "enlace_documento": "",
        "seccion_destacada": {
          "mostrar_en_seccion_destacada": true,
          "contiene_boton": false,
          "enlace_seccion_destacada": "",
          "texto_boton_destacado": "",
          "texto_seccion_destacada": "La convocatoria abre el 1 de marzo"
        }
      },
      {
        "orden_en_flujo": 1,
        "nombre_etapa": "Publicación de bases",
        "fecha": {
          "tipo_fecha": "fecha_unica",
          "fecha_inicio": "01-03-2025",
          "fecha_fin": ""
        },
        "enlace_documento": "docs/bases.pdf"
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
          "texto_boton_destacado": "Postula aquí",
          "texto_seccion_destacada": ""
        }
      },
      {
        "orden_en_flujo": 3,
        "nombre_etapa": "Evaluación",
        "fecha": {
          "tipo_fecha": "periodo",
          "fecha_inicio": "02-05-2025",
          "fecha_fin": "13-06-2025"
        },
        "enlace_documento": ""
      },
      {
        "orden_en_flujo": 4,
        "nombre_etapa": "Resultados",
        "fecha": {
          "tipo_fecha": "fecha_unica",
          "fecha_inicio": "16-06-2025",
          "fecha_fin": ""
        },
        "enlace_documento": "docs/resultados.pdf",
        "seccion_destacada": {
          "mostrar_en_seccion_destacada": true,
          "contiene_boton": true,
          "enlace_seccion_destacada": "docs/resultados.pdf",
          "texto_boton_destacado": "Ver resultados",
          "texto_seccion_destacada": ""
        }
      }
    ]
  }
}
"#;
