//! Workspace info lookup: run `tf workfold /collection` and scrape a few labelled lines.
//!
//! The scrape is best-effort. A failed command is an error; a successful command with missing
//! labels is not, and the affected fields fall back to placeholders.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::TfsError;
use crate::exec::Executor;
use crate::translate::workfold_args;
use crate::util::{first_line_containing, value_after_first_colon, value_after_last_colon};

pub const UNKNOWN: &str = "Unknown";
pub const DEFAULT_LOCATION: &str = "Local";
pub const ENV_COMPUTER_NAME: &str = "COMPUTERNAME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub name: String,
    pub owner: String,
    pub computer: String,
    pub comment: Option<String>,
    /// Team Project Collection URL.
    pub collection: String,
    /// Local or Server.
    pub location: String,
}

/// Host name as reported by the ambient environment.
pub fn computer_name() -> Option<String> {
    env::var(ENV_COMPUTER_NAME)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Scrape `workfold` output. `computer` comes from the caller so parsing stays pure.
pub fn parse_workfold_output(output: &str, computer: Option<String>) -> WorkspaceInfo {
    let last = |label: &str, fallback: &str| {
        first_line_containing(output, label)
            .map(|l| value_after_last_colon(l).to_string())
            .unwrap_or_else(|| fallback.to_string())
    };
    let collection = first_line_containing(output, "Collection:")
        .map(value_after_first_colon)
        .filter(|v| !v.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), str::to_string);
    let comment = first_line_containing(output, "Comment:")
        .map(value_after_first_colon)
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    let location = first_line_containing(output, "Location:")
        .map(value_after_last_colon)
        .filter(|v| !v.is_empty())
        .map_or_else(|| DEFAULT_LOCATION.to_string(), str::to_string);

    WorkspaceInfo {
        name: last("Workspace:", UNKNOWN),
        owner: last("Owner:", UNKNOWN),
        computer: computer.unwrap_or_else(|| UNKNOWN.to_string()),
        comment,
        collection,
        location,
    }
}

#[instrument(level = "info", skip(executor), err)]
pub fn lookup(executor: &Executor) -> Result<WorkspaceInfo, TfsError> {
    let result = executor.execute(&workfold_args());
    if !result.success {
        return Err(TfsError::Upstream {
            command: result.command,
            message: result.error.unwrap_or_default(),
        });
    }
    Ok(parse_workfold_output(&result.output, computer_name()))
}
