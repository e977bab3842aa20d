use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tfs_bridge::{
    display_for_tfs_error, exit_code_for_tfs_error, CommandResult, OperationOptions, TfsClient,
    ToolResponse,
};

/// Exit code for a finished operation: 0 on success, the child's code when it fits, else 1.
pub(crate) fn exit_code_for_result(result: &CommandResult) -> u8 {
    if result.success {
        0
    } else {
        u8::try_from(result.return_code)
            .ok()
            .filter(|c| *c != 0)
            .unwrap_or(1)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize response")?;
    println!("{text}");
    Ok(())
}

pub(crate) fn run_operation(client: &TfsClient, op: &OperationOptions) -> Result<ExitCode> {
    let use_err = tfs_bridge::color_enabled_stderr();
    match client.try_run(op) {
        Ok(result) => {
            print_json(&ToolResponse::from(&result))?;
            if !result.success {
                tfs_bridge::log_warn_stderr(
                    use_err,
                    &format!(
                        "tfs-bridge: {} failed (exit code {})",
                        op.name(),
                        result.return_code
                    ),
                );
            }
            Ok(ExitCode::from(exit_code_for_result(&result)))
        }
        Err(e) => {
            let command = client.executor().command_line(&op.to_args());
            let folded = CommandResult::launch_failure(command, display_for_tfs_error(&e));
            print_json(&ToolResponse::from(folded))?;
            tfs_bridge::log_error_stderr(
                use_err,
                &format!(
                    "tfs-bridge: could not run {}: {e}",
                    client.config().executable()
                ),
            );
            Ok(ExitCode::from(exit_code_for_tfs_error(&e)))
        }
    }
}

pub(crate) fn run_workspace_info(client: &TfsClient) -> Result<ExitCode> {
    match client.workspace_info() {
        Ok(info) => {
            print_json(&info)?;
            Ok(ExitCode::from(0))
        }
        Err(e) => {
            print_json(&serde_json::json!({ "error": e.to_string() }))?;
            Ok(ExitCode::from(exit_code_for_tfs_error(&e)))
        }
    }
}

pub(crate) fn run_path_status(client: &TfsClient, path: &str) -> Result<ExitCode> {
    let status = client.path_status(path);
    print_json(&status)?;
    Ok(ExitCode::from(if status.success { 0 } else { 1 }))
}

/// Parse a JSON request: an operation object plus an optional `working_directory` override.
pub(crate) fn parse_request(raw: &str) -> Result<(OperationOptions, Option<String>)> {
    let mut value: serde_json::Value =
        serde_json::from_str(raw).context("request is not valid JSON")?;
    let working_directory = value
        .as_object_mut()
        .and_then(|o| o.remove("working_directory"))
        .and_then(|v| v.as_str().map(str::to_string));
    let op: OperationOptions =
        serde_json::from_value(value).context("request does not describe a tf operation")?;
    Ok((op, working_directory))
}

pub(crate) fn run_request(client: &TfsClient, request: &str) -> Result<ExitCode> {
    let raw = if request == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        request.to_string()
    };
    let (op, working_directory) = parse_request(&raw)?;
    let client = client.for_call(working_directory.as_deref());
    run_operation(&client, &op)
}
