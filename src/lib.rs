#![allow(clippy::module_name_repetitions)]
//! tfs-bridge: a structured facade over the Team Foundation Server command-line client.
//!
//! Architecture
//! - options.rs: typed, serde-readable option records, one per `tf` operation.
//! - translate.rs: pure `options -> argument vector` mapping (order-stable, no quoting).
//! - exec.rs: spawn `tf` with the vector, capture stdout/stderr/exit code into `CommandResult`.
//! - workspace.rs: `tf workfold /collection` plus best-effort label scraping.
//! - client.rs: `TfsClient`, one method per operation over an immutable `ClientConfig`.
//! - result.rs: `CommandResult` and the upstream envelopes (`ToolResponse`, `PathStatus`).
//! - config.rs / errors.rs / telemetry.rs / color.rs: configuration, error mapping, logging,
//!   and stderr painting.
//!
//! Environment
//! - TFS_BRIDGE_TF_EXE / TFS_BRIDGE_WORKING_DIR / TFS_BRIDGE_TIMEOUT: default client config.
//! - TFS_BRIDGE_LOG (falls back to RUST_LOG): tracing filter for stderr logs.
//! - TFS_BRIDGE_COLOR / NO_COLOR: stderr color control.
//! - COMPUTERNAME: reported as the workspace computer.
//!
//! Invariants
//! - `CommandResult::success == (return_code == 0)`; `-1` marks runs without an exit code.
//! - Ordinary `tf` failures are in-band results; only launch failures (via `try_run` /
//!   `execute_checked`) and workspace lookup failures surface as `Err(TfsError)`.

pub mod client;
pub mod color;
pub mod config;
pub mod errors;
pub mod exec;
pub mod options;
pub mod result;
pub mod telemetry;
pub mod translate;
pub mod util;
pub mod workspace;

pub use client::TfsClient;
pub use color::{
    color_enabled_stderr, log_error_stderr, log_info_stderr, log_warn_stderr, paint,
    set_color_mode, ColorMode,
};
pub use config::{parse_timeout, ClientConfig, DEFAULT_TF_EXE};
pub use errors::{display_for_tfs_error, exit_code_for_tfs_error, TfsError};
pub use exec::Executor;
pub use options::{
    BranchOptions, CheckinOptions, CheckoutOptions, GetLatestOptions, HistoryOptions,
    MergeOptions, OperationOptions, PathOptions, RenameOptions, StatusOptions, WorkItemId,
};
pub use result::{CommandResult, PathStatus, ToolResponse, NO_EXIT_CODE};
pub use telemetry::{logging_init, ENV_LOG};
pub use translate::build_args;
pub use workspace::{computer_name, parse_workfold_output, WorkspaceInfo};
