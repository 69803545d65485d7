//! Color mode resolution for terminal output

use clap::ValueEnum;
use std::io::IsTerminal;

/// `--color` flag values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Follow NO_COLOR / CLICOLOR / CLICOLOR_FORCE, then TTY detection
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether styled output should be used
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => env_allows_colors(),
        }
    }
}

/// Environment conventions: NO_COLOR wins, then CLICOLOR_FORCE, then CLICOLOR
fn env_allows_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
