use std::process::ExitCode;

use tfs_bridge::TfsClient;

fn highlight(use_color: bool, s: &str) -> String {
    tfs_bridge::paint(use_color, "\x1b[34;1m", s)
}

pub fn run_doctor(client: &TfsClient) -> ExitCode {
    let use_err = tfs_bridge::color_enabled_stderr();
    let cfg = client.config();

    eprintln!("tfs-bridge doctor");
    eprintln!();
    eprintln!("  version: v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "  host:    {} / {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    eprintln!(
        "  build:   {} ({}, {})",
        env!("TFS_BRIDGE_BUILD_DATE"),
        env!("TFS_BRIDGE_BUILD_TARGET"),
        env!("TFS_BRIDGE_BUILD_PROFILE")
    );
    eprintln!("  rustc:   {}", env!("TFS_BRIDGE_BUILD_RUSTC"));
    eprintln!();

    eprintln!("  tf executable:     {}", highlight(use_err, cfg.executable()));
    match cfg.resolve_executable() {
        Ok(p) => eprintln!(
            "  tf resolved:       {}",
            highlight(use_err, &p.display().to_string())
        ),
        Err(e) => tfs_bridge::log_warn_stderr(use_err, &format!("  tf resolved:       not found ({e})")),
    }
    eprintln!(
        "  working directory: {}",
        highlight(use_err, &cfg.working_directory().display().to_string())
    );
    if !cfg.working_directory().is_dir() {
        tfs_bridge::log_warn_stderr(use_err, "  warning: working directory does not exist");
    }
    let timeout = cfg
        .timeout()
        .map(|d| humantime::format_duration(d).to_string())
        .unwrap_or_else(|| "(none)".to_string());
    eprintln!("  timeout:           {}", highlight(use_err, &timeout));
    let computer = tfs_bridge::computer_name().unwrap_or_else(|| "(unset)".to_string());
    eprintln!("  computer:          {}", highlight(use_err, &computer));
    eprintln!();

    tfs_bridge::log_info_stderr(use_err, "doctor: completed diagnostics.");
    ExitCode::from(0)
}
