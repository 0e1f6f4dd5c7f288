//! Command-line interface.

use tictactoe::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Two-player Tic Tac Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player Tic Tac Toe with scores and light/dark themes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Theme at startup, overriding the settings file (light or dark)
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Log file, overriding the settings file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.theme, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::try_parse_from(["tictactoe", "--theme", "dark"]).unwrap();
        assert_eq!(cli.theme, Some(Theme::Dark));
        assert!(Cli::try_parse_from(["tictactoe", "--theme", "blue"]).is_err());
    }
}
