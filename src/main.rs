use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use hitos::commands::{build, check, init, preview};
use hitos::completions::{generate_completions, Shell};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "hitos")]
#[command(about = "Static timeline page generator for convocatoria calendars", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold hitos.toml and a sample datos.json
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Render the timeline page
    Build {
        /// Data source: a local file or an http(s) URL
        /// (default: data.source from hitos.toml, then ./datos.json)
        source: Option<String>,

        /// Reference date override (default: today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Output directory (default: page.output from hitos.toml, then public/)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show the evaluated timeline in the terminal
    Preview {
        /// Data source: a local file or an http(s) URL
        /// (default: data.source from hitos.toml, then ./datos.json)
        source: Option<String>,

        /// Reference date override (default: today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Print the evaluation as JSON instead of the colored view
        #[arg(long)]
        json: bool,
    },

    /// Validate calendar data
    Check {
        /// Data source: a local file or an http(s) URL
        /// (default: data.source from hitos.toml, then ./datos.json)
        source: Option<String>,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => init::execute(force),
        Commands::Build {
            source,
            date,
            output,
        } => build::execute(source, date, output),
        Commands::Preview { source, date, json } => preview::execute(source, date, json),
        Commands::Check { source } => check::execute(source),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}

/// Diagnostics go to stderr so stdout stays clean for page output and
/// JSON reports. `HITOS_LOG` (or `RUST_LOG`) overrides the filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("HITOS_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "hitos=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
