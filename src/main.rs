use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tfs_bridge::{ClientConfig, TfsClient};

mod cli;
mod commands;
mod doctor;

use cli::{Cli, Cmd};

/// Environment (and `.env`) first, then CLI flags on top.
fn build_config(cli: &Cli) -> Result<ClientConfig> {
    let mut cfg = ClientConfig::from_env().context("invalid TFS_BRIDGE_* environment")?;
    if let Some(exe) = cli.tf_exe_path.as_deref() {
        cfg = cfg.with_executable(exe);
    }
    if let Some(dir) = cli.working_directory.as_deref() {
        cfg = cfg.with_working_directory(dir);
    }
    if cli.timeout.is_some() {
        cfg = cfg.with_timeout(cli.timeout);
    }
    Ok(cfg)
}

fn dispatch(cli: Cli) -> Result<ExitCode> {
    let client = TfsClient::new(build_config(&cli)?);
    match cli.command {
        Cmd::Doctor => Ok(doctor::run_doctor(&client)),
        Cmd::WorkspaceInfo => commands::run_workspace_info(&client),
        Cmd::PathStatus { path } => commands::run_path_status(&client, &path),
        Cmd::Run { request } => commands::run_request(&client, &request),
        other => match other.into_operation() {
            Some(op) => commands::run_operation(&client, &op),
            None => Ok(ExitCode::from(2)),
        },
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Some(mode) = cli.color {
        tfs_bridge::set_color_mode(mode);
    }
    if cli.verbose && std::env::var_os(tfs_bridge::ENV_LOG).is_none() {
        std::env::set_var(tfs_bridge::ENV_LOG, "info");
    }
    tfs_bridge::logging_init();

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            let use_err = tfs_bridge::color_enabled_stderr();
            tfs_bridge::log_error_stderr(use_err, &format!("tfs-bridge: {e:#}"));
            ExitCode::from(1)
        }
    }
}
