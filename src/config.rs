//! Runtime configuration from command-line arguments and the environment.

use crate::utils::persistence;
use std::io;
use std::path::PathBuf;

pub const ENV_PLAYER: &str = "FLAPPY_PLAYER";
pub const ENV_SCORES: &str = "FLAPPY_SCORES";
pub const ENV_LOG: &str = "FLAPPY_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const MAX_PLAYER_NAME_LEN: usize = 24;

pub const USAGE: &str = "\
Flappy - Terminal Flappy Bird

Usage: flappy [options]

Options:
  --player <name>   Play as <name> and skip the login screen
  --scores <path>   Score file to use (default: data directory)
  --strict-scores   Refuse to start if the score file is unreadable
  --version         Show version information
  --help            Show this help message

Environment:
  FLAPPY_PLAYER     Same as --player
  FLAPPY_SCORES     Same as --scores
  FLAPPY_LOG        Log filter, e.g. debug or flappy=trace (default: info)";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Invalid player name: {0}")]
    InvalidPlayer(String),
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Config),
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Player identity; `None` shows the login screen.
    pub player: Option<String>,
    /// Explicit score file; `None` uses the data directory.
    pub scores_path: Option<PathBuf>,
    pub strict_scores: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: None,
            scores_path: None,
            strict_scores: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Resolve the score file, creating the data directory for the default.
    pub fn resolve_scores_path(&self) -> io::Result<PathBuf> {
        match &self.scores_path {
            Some(path) => Ok(path.clone()),
            None => persistence::default_scores_path(),
        }
    }
}

/// Parse arguments (without the program name). Flags override environment
/// variables, which are looked up through `env`.
pub fn parse_args<I>(args: I, env: &dyn Fn(&str) -> Option<String>) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config {
        player: env(ENV_PLAYER),
        scores_path: env(ENV_SCORES).map(PathBuf::from),
        log_filter: env(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        ..Config::default()
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--player" => {
                let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg))?;
                config.player = Some(value);
            }
            "--scores" => {
                let value = args.next().ok_or_else(|| ConfigError::MissingValue(arg))?;
                config.scores_path = Some(PathBuf::from(value));
            }
            "--strict-scores" => config.strict_scores = true,
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    if let Some(player) = config.player.take() {
        config.player =
            Some(validate_player_name(&player).map_err(ConfigError::InvalidPlayer)?);
    }

    Ok(Command::Play(config))
}

/// Check a player name and return it trimmed.
pub fn validate_player_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_PLAYER_NAME_LEN {
        return Err(format!(
            "Name must be at most {} characters",
            MAX_PLAYER_NAME_LEN
        ));
    }
    if name.chars().any(char::is_control) {
        return Err("Name cannot contain control characters".to_string());
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let command = parse_args(Vec::new(), &no_env).unwrap();
        assert_eq!(command, Command::Play(Config::default()));
    }

    #[test]
    fn test_flags() {
        let command = parse_args(
            args(&["--player", " alice ", "--scores", "/tmp/s.json", "--strict-scores"]),
            &no_env,
        )
        .unwrap();
        let Command::Play(config) = command else {
            panic!("expected play command");
        };
        assert_eq!(config.player.as_deref(), Some("alice"));
        assert_eq!(config.scores_path, Some(PathBuf::from("/tmp/s.json")));
        assert!(config.strict_scores);
        assert_eq!(
            config.resolve_scores_path().unwrap(),
            PathBuf::from("/tmp/s.json")
        );
    }

    #[test]
    fn test_env_fallback_and_override() {
        let env = |key: &str| match key {
            ENV_PLAYER => Some("bob".to_string()),
            ENV_LOG => Some("debug".to_string()),
            _ => None,
        };
        let Command::Play(config) = parse_args(Vec::new(), &env).unwrap() else {
            panic!("expected play command");
        };
        assert_eq!(config.player.as_deref(), Some("bob"));
        assert_eq!(config.log_filter, "debug");

        let Command::Play(config) = parse_args(args(&["--player", "carol"]), &env).unwrap()
        else {
            panic!("expected play command");
        };
        assert_eq!(config.player.as_deref(), Some("carol"));
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(parse_args(args(&["-v"]), &no_env).unwrap(), Command::Version);
        assert_eq!(parse_args(args(&["--help"]), &no_env).unwrap(), Command::Help);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_args(args(&["--player"]), &no_env),
            Err(ConfigError::MissingValue(_))
        ));
        assert!(matches!(
            parse_args(args(&["--fly"]), &no_env),
            Err(ConfigError::UnknownArgument(_))
        ));
        assert!(matches!(
            parse_args(args(&["--player", "   "]), &no_env),
            Err(ConfigError::InvalidPlayer(_))
        ));
    }

    #[test]
    fn test_validate_player_name() {
        assert_eq!(validate_player_name("  Ann  ").unwrap(), "Ann");
        assert!(validate_player_name("").is_err());
        assert!(validate_player_name(&"x".repeat(MAX_PLAYER_NAME_LEN + 1)).is_err());
        assert!(validate_player_name("a\tb").is_err());
    }
}
