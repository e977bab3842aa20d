//! Uniform result record of one `tf` invocation and the envelopes forwarded upstream.
//!
//! Invariants:
//! - `success == (return_code == 0)`.
//! - `error` is `Some` exactly when `success` is false.
//! - `return_code == -1` marks runs that never produced an exit code (launch failure,
//!   timeout, signal); it is a sentinel, not a process status.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Return code recorded when no exit code was observed.
pub const NO_EXIT_CODE: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
    pub return_code: i32,
    /// Executable and arguments joined by spaces, for diagnostics only.
    pub command: String,
}

impl CommandResult {
    /// The process ran to completion with `code`. Stdout is kept even on failure.
    pub fn completed(command: String, code: i32, stdout: String, stderr: String) -> Self {
        let success = code == 0;
        Self {
            success,
            output: stdout,
            error: if success { None } else { Some(stderr) },
            return_code: code,
            command,
        }
    }

    /// The process could not be started; `message` is the OS-level description.
    pub fn launch_failure(command: String, message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(message.into()),
            return_code: NO_EXIT_CODE,
            command,
        }
    }

    /// The deadline expired and the child was killed; partial stdout is kept.
    pub fn timed_out(command: String, timeout: Duration, stdout: String) -> Self {
        Self {
            success: false,
            output: stdout,
            error: Some(format!(
                "command timed out after {}",
                humantime::format_duration(timeout)
            )),
            return_code: NO_EXIT_CODE,
            command,
        }
    }

    /// The process ended without an exit code (killed by a signal).
    pub fn terminated(command: String, stdout: String, stderr: String, detail: &str) -> Self {
        let error = if stderr.trim().is_empty() {
            format!("process terminated without an exit code ({detail})")
        } else {
            stderr
        };
        Self {
            success: false,
            output: stdout,
            error: Some(error),
            return_code: NO_EXIT_CODE,
            command,
        }
    }
}

/// Four-field response returned by every RPC tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
    pub command: String,
}

impl From<&CommandResult> for ToolResponse {
    fn from(r: &CommandResult) -> Self {
        Self {
            success: r.success,
            output: r.output.clone(),
            error: r.error.clone(),
            command: r.command.clone(),
        }
    }
}

impl From<CommandResult> for ToolResponse {
    fn from(r: CommandResult) -> Self {
        Self {
            success: r.success,
            output: r.output,
            error: r.error,
            command: r.command,
        }
    }
}

/// Status lookup keyed by a single path; echoes the path back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStatus {
    pub path: String,
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}

impl PathStatus {
    pub fn from_result(path: impl Into<String>, r: CommandResult) -> Self {
        Self {
            path: path.into(),
            success: r.success,
            output: r.output,
            error: r.error,
        }
    }
}
