#![allow(clippy::module_name_repetitions)]
//! Client configuration: which `tf` executable to run, where, and for how long.
//!
//! A `ClientConfig` is an immutable value. Per-call overrides (for example a different working
//! directory) derive a new value via the `with_*` methods; nothing mutates a shared config.

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use which::which;

use crate::errors::TfsError;

/// Bare executable name resolved through PATH when no explicit path is configured.
pub const DEFAULT_TF_EXE: &str = "tf";

pub const ENV_TF_EXE: &str = "TFS_BRIDGE_TF_EXE";
pub const ENV_WORKING_DIR: &str = "TFS_BRIDGE_WORKING_DIR";
pub const ENV_TIMEOUT: &str = "TFS_BRIDGE_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    executable: String,
    working_directory: PathBuf,
    timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_TF_EXE.to_string(),
            working_directory: current_dir_or_dot(),
            timeout: None,
        }
    }
}

fn current_dir_or_dot() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl ClientConfig {
    /// Build a config; `None` or empty values fall back to `tf` and the current directory.
    pub fn new(executable: Option<String>, working_directory: Option<PathBuf>) -> Self {
        let base = Self::default();
        let base = match non_empty(executable) {
            Some(exe) => base.with_executable(exe),
            None => base,
        };
        match working_directory {
            Some(dir) => base.with_working_directory(dir),
            None => base,
        }
    }

    /// Read `TFS_BRIDGE_TF_EXE`, `TFS_BRIDGE_WORKING_DIR` and `TFS_BRIDGE_TIMEOUT`.
    pub fn from_env() -> Result<Self, TfsError> {
        let exe = non_empty(env::var(ENV_TF_EXE).ok());
        let dir = non_empty(env::var(ENV_WORKING_DIR).ok()).map(PathBuf::from);
        let timeout = match non_empty(env::var(ENV_TIMEOUT).ok()) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };
        Ok(Self::new(exe, dir).with_timeout(timeout))
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn with_executable(&self, executable: impl Into<String>) -> Self {
        let executable = executable.into();
        let executable = if executable.trim().is_empty() {
            DEFAULT_TF_EXE.to_string()
        } else {
            executable
        };
        Self {
            executable,
            ..self.clone()
        }
    }

    /// Derive a config that runs in `dir`; an empty path keeps the current working directory.
    pub fn with_working_directory(&self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let working_directory = if dir.as_os_str().is_empty() {
            self.working_directory.clone()
        } else {
            dir
        };
        Self {
            working_directory,
            ..self.clone()
        }
    }

    /// A zero duration disables the deadline, same as `None`.
    pub fn with_timeout(&self, timeout: Option<Duration>) -> Self {
        Self {
            timeout: timeout.filter(|d| !d.is_zero()),
            ..self.clone()
        }
    }

    /// Resolve the configured executable through PATH (or check an explicit path).
    pub fn resolve_executable(&self) -> io::Result<PathBuf> {
        which(&self.executable).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} was not found ({e})", self.executable),
            )
        })
    }
}

/// Parse a humantime duration ("30s", "2m", "1h 30m"); a bare integer counts seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration, TfsError> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(raw)
        .map_err(|e| TfsError::Message(format!("invalid timeout '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bare_tf_and_current_dir() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.executable(), "tf");
        assert_eq!(cfg.working_directory(), current_dir_or_dot().as_path());
        assert_eq!(cfg.timeout(), None);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let cfg = ClientConfig::new(Some("  ".to_string()), Some(PathBuf::new()));
        assert_eq!(cfg.executable(), "tf");
        assert_eq!(cfg.working_directory(), current_dir_or_dot().as_path());
    }

    #[test]
    fn working_directory_override_leaves_original_untouched() {
        let base = ClientConfig::new(Some("tf.exe".to_string()), Some(PathBuf::from("/a")));
        let derived = base.with_working_directory("/b");
        assert_eq!(base.working_directory(), Path::new("/a"));
        assert_eq!(derived.working_directory(), Path::new("/b"));
        assert_eq!(derived.executable(), "tf.exe");
    }

    #[test]
    fn zero_timeout_means_no_deadline() {
        let cfg = ClientConfig::default().with_timeout(Some(Duration::ZERO));
        assert_eq!(cfg.timeout(), None);
    }

    #[test]
    fn parse_timeout_accepts_seconds_and_humantime() {
        assert_eq!(parse_timeout("15").unwrap(), Duration::from_secs(15));
        assert_eq!(parse_timeout("2m").unwrap(), Duration::from_secs(120));
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn resolve_missing_executable_is_not_found() {
        let cfg = ClientConfig::default().with_executable("tfs-bridge-definitely-missing-exe");
        let err = cfg.resolve_executable().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
