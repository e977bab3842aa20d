#![allow(clippy::module_name_repetitions)]
//! `TfsClient`: one method per `tf` operation over an immutable `ClientConfig`.
//!
//! Each call translates its options, runs exactly one child process and returns the uniform
//! `CommandResult`. A per-call working directory is served by deriving a new client
//! (`with_working_directory` / `for_call`); the original client is never mutated.

use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::errors::TfsError;
use crate::exec::Executor;
use crate::options::{
    BranchOptions, CheckinOptions, CheckoutOptions, GetLatestOptions, HistoryOptions,
    MergeOptions, OperationOptions, PathOptions, RenameOptions, StatusOptions,
};
use crate::result::{CommandResult, PathStatus};
use crate::translate;
use crate::workspace::{self, WorkspaceInfo};

#[derive(Debug, Clone)]
pub struct TfsClient {
    executor: Executor,
}

impl Default for TfsClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl TfsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            executor: Executor::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn with_working_directory(&self, dir: impl Into<PathBuf>) -> Self {
        Self::new(self.config().with_working_directory(dir))
    }

    /// Client for one call: a derived client when an override is given, else a clone.
    pub fn for_call(&self, working_directory: Option<&str>) -> Self {
        match working_directory.map(str::trim).filter(|d| !d.is_empty()) {
            Some(dir) => self.with_working_directory(dir),
            None => self.clone(),
        }
    }

    fn run_args(&self, operation: &'static str, args: Vec<String>) -> CommandResult {
        tracing::info!(
            operation,
            cwd = %self.config().working_directory().display(),
            argc = args.len(),
            "running tf {operation}"
        );
        let result = self.executor.execute(&args);
        log_outcome(operation, &result);
        result
    }

    /// Dispatch any operation.
    pub fn run(&self, op: &OperationOptions) -> CommandResult {
        self.run_args(op.name(), translate::build_args(op))
    }

    /// Like `run`, but a launch failure is returned as `Err` instead of a `-1` result.
    pub fn try_run(&self, op: &OperationOptions) -> Result<CommandResult, TfsError> {
        let operation = op.name();
        let result = self.executor.execute_checked(&translate::build_args(op))?;
        log_outcome(operation, &result);
        Ok(result)
    }

    pub fn checkout(&self, options: &CheckoutOptions) -> CommandResult {
        self.run_args("checkout", translate::checkout_args(options))
    }

    pub fn checkin(&self, options: &CheckinOptions) -> CommandResult {
        self.run_args("checkin", translate::checkin_args(options))
    }

    pub fn add(&self, options: &PathOptions) -> CommandResult {
        self.run_args("add", translate::add_args(options))
    }

    pub fn delete(&self, options: &PathOptions) -> CommandResult {
        self.run_args("delete", translate::delete_args(options))
    }

    pub fn rename(&self, options: &RenameOptions) -> CommandResult {
        self.run_args("rename", translate::rename_args(options))
    }

    pub fn undo(&self, options: &PathOptions) -> CommandResult {
        self.run_args("undo", translate::undo_args(options))
    }

    pub fn status(&self, options: &StatusOptions) -> CommandResult {
        self.run_args("status", translate::status_args(options))
    }

    pub fn get_latest(&self, options: &GetLatestOptions) -> CommandResult {
        self.run_args("get-latest", translate::get_latest_args(options))
    }

    pub fn branch(&self, options: &BranchOptions) -> CommandResult {
        self.run_args("branch", translate::branch_args(options))
    }

    pub fn merge(&self, options: &MergeOptions) -> CommandResult {
        self.run_args("merge", translate::merge_args(options))
    }

    pub fn history(&self, options: &HistoryOptions) -> CommandResult {
        self.run_args("history", translate::history_args(options))
    }

    pub fn workspace_info(&self) -> Result<WorkspaceInfo, TfsError> {
        workspace::lookup(&self.executor)
    }

    /// Non-recursive status of a single path, shaped for resource-style lookups.
    pub fn path_status(&self, path: &str) -> PathStatus {
        let result = self.status(&StatusOptions {
            paths: Some(vec![path.to_string()]),
            recursive: false,
        });
        PathStatus::from_result(path, result)
    }
}

fn log_outcome(operation: &str, result: &CommandResult) {
    if result.success {
        tracing::info!(operation, command = %result.command, "tf {operation} succeeded");
    } else {
        tracing::warn!(
            operation,
            command = %result.command,
            return_code = result.return_code,
            error = result.error.as_deref().unwrap_or_default(),
            "tf {operation} failed"
        );
    }
}
