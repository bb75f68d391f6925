use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::PrefsError;
use crate::prefs::PrefsStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cats",
    version,
    about = "All About Cats - a terminal page about cats",
    long_about = None
)]
pub struct CliArgs {
    /// Directory holding the theme preference file.
    #[arg(long, value_name = "PATH", env = "CATS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log file path. Logging is off unless this is set.
    #[arg(long, value_name = "PATH", env = "CATS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity level. `RUST_LOG` takes precedence.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Disable mouse capture.
    #[arg(long)]
    pub no_mouse: bool,
}

impl CliArgs {
    pub fn prefs_store(&self) -> Result<PrefsStore, PrefsError> {
        match &self.config_dir {
            Some(dir) => Ok(PrefsStore::with_dir(dir)),
            None => PrefsStore::from_project_dirs(),
        }
    }

    pub fn mouse_enabled(&self) -> bool {
        !self.no_mouse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::PREFS_FILE_NAME;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["cats"]).expect("parse");
        assert_eq!(args.log_level, LogLevel::Info);
        assert!(args.mouse_enabled());
    }

    #[test]
    fn test_config_dir_override() {
        let args =
            CliArgs::try_parse_from(["cats", "--config-dir", "/tmp/cats"]).expect("parse");
        let store = args.prefs_store().expect("store");
        assert_eq!(
            store.path(),
            PathBuf::from("/tmp/cats").join(PREFS_FILE_NAME)
        );
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::try_parse_from(["cats", "--no-mouse", "--log-level", "debug"])
            .expect("parse");
        assert!(!args.mouse_enabled());
        assert_eq!(args.log_level.to_string(), "debug");
    }
}
