//! Completion scripts for the `hitos` binary.

use std::io;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Command;
use clap_complete::generate;

/// Shells the `completions` subcommand can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

const SUPPORTED: [(&str, Shell); 3] = [
    ("bash", Shell::Bash),
    ("zsh", Shell::Zsh),
    ("fish", Shell::Fish),
];

impl Shell {
    fn generator(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
        }
    }
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_lowercase();
        SUPPORTED
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|&(_, shell)| shell)
            .ok_or_else(|| {
                let names: Vec<&str> = SUPPORTED.iter().map(|(name, _)| *name).collect();
                anyhow!(
                    "Unsupported shell: {s}. Supported shells: {}",
                    names.join(", ")
                )
            })
    }
}

/// Write the completion script for `shell` to stdout.
///
/// ```no_run
/// use std::str::FromStr;
/// use clap::Command;
/// use hitos::completions::{generate_completions, Shell};
///
/// let mut cmd = Command::new("hitos");
/// generate_completions(&mut cmd, Shell::from_str("zsh").unwrap());
/// ```
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    let bin_name = cmd.get_name().to_string();
    generate(shell.generator(), cmd, bin_name, &mut io::stdout());
}
