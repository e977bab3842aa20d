//! Error mapping guide:
//! - Ordinary non-zero exits of `tf` are not errors; they travel in-band in `CommandResult`.
//! - Launch failures map io::ErrorKind::NotFound to exit code 127; all others to 1.
//! - Upstream failures (workspace lookup) always map to 1.
use std::fmt;
use std::io;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

#[derive(Debug)]
pub enum TfsError {
    /// The executable could not be started at all.
    Launch(io::Error),
    /// The child started but waiting on it failed at the OS level.
    Wait(io::Error),
    /// A command whose output was required (workspace lookup) reported failure.
    Upstream { command: String, message: String },
    /// Configuration or other caller-facing problems.
    Message(String),
}

impl fmt::Display for TfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfsError::Launch(e) => write!(f, "{e}"),
            TfsError::Wait(e) => write!(f, "failed to wait for process: {e}"),
            TfsError::Upstream { message, .. } => {
                write!(f, "Failed to get workspace info: {message}")
            }
            TfsError::Message(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for TfsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfsError::Launch(e) | TfsError::Wait(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TfsError {
    fn from(e: io::Error) -> Self {
        TfsError::Launch(e)
    }
}

pub fn exit_code_for_tfs_error(e: &TfsError) -> u8 {
    match e {
        TfsError::Launch(ioe) => exit_code_for_io_error(ioe),
        TfsError::Wait(_) | TfsError::Upstream { .. } | TfsError::Message(_) => 1,
    }
}

/// Render the text carried in the `error` field of result envelopes.
///
/// Launch failures keep the bare OS description so callers see exactly what the OS reported.
pub fn display_for_tfs_error(e: &TfsError) -> String {
    match e {
        TfsError::Launch(ioe) => ioe.to_string(),
        other => other.to_string(),
    }
}
