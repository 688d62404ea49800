use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Adjustments to the game clock
    #[serde(default)]
    timing: TimingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Resolve the configured timing knobs against the built-in defaults
    pub(crate) fn timing(&self) -> Timing {
        self.timing.resolve()
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct TimingConfig {
    /// Milliseconds between ticks at level 1
    tick_ms: Option<u64>,

    /// Milliseconds shaved off the tick delay when level 2 begins
    speedup_ms: Option<u64>,
}

impl TimingConfig {
    fn resolve(self) -> Timing {
        Timing {
            base_tick: self.tick_ms.map_or(consts::BASE_TICK, Duration::from_millis),
            level_speedup: self
                .speedup_ms
                .map_or(consts::LEVEL_SPEEDUP, Duration::from_millis),
        }
    }
}

/// The game clock's knobs, handed to each new game session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timing {
    /// Time between ticks at level 1
    pub(crate) base_tick: Duration,

    /// One-time reduction of the tick delay upon reaching level 2
    pub(crate) level_speedup: Duration,
}

impl Default for Timing {
    fn default() -> Timing {
        Timing {
            base_tick: consts::BASE_TICK,
            level_speedup: consts::LEVEL_SPEEDUP,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[timing]\ntick-ms = 150\nspeedup-ms = 10\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(
            config.timing(),
            Timing {
                base_tick: Duration::from_millis(150),
                level_speedup: Duration::from_millis(10),
            }
        );
    }

    #[test]
    fn load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[timing]\ntick-ms = 150\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(
            config.timing(),
            Timing {
                base_tick: Duration::from_millis(150),
                level_speedup: consts::LEVEL_SPEEDUP,
            }
        );
    }

    #[test]
    fn load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.timing(), Timing::default());
    }

    #[test]
    fn load_missing_file_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_file_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.toml");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[timing]\ntick-ms = \"fast\"\n").unwrap();
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }
}
