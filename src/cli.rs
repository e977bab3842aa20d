use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tfs_bridge::{
    BranchOptions, CheckinOptions, CheckoutOptions, ColorMode, GetLatestOptions, HistoryOptions,
    MergeOptions, OperationOptions, PathOptions, RenameOptions, StatusOptions, WorkItemId,
};

/// Validate that a checkin comment carries text
fn validate_comment(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("checkin comment must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_timeout_arg(s: &str) -> Result<Duration, String> {
    tfs_bridge::parse_timeout(s).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(
    name = "tfs-bridge",
    version,
    about = "Run one Team Foundation Server (tf) operation and print its result envelope as JSON."
)]
pub(crate) struct Cli {
    /// Path to tf.exe (default: $TFS_BRIDGE_TF_EXE, else `tf` on PATH)
    #[arg(long = "tf-exe-path", global = true)]
    pub tf_exe_path: Option<String>,

    /// Working directory for path resolution (default: $TFS_BRIDGE_WORKING_DIR, else current dir)
    #[arg(long = "working-directory", global = true)]
    pub working_directory: Option<PathBuf>,

    /// Kill tf when it runs longer than this (e.g. 30s, 2m). Default: no deadline
    #[arg(long, global = true, value_parser = parse_timeout_arg)]
    pub timeout: Option<Duration>,

    /// Colorize stderr messages: auto|always|never
    #[arg(long = "color", value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Log each operation to stderr (info level unless TFS_BRIDGE_LOG is set)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Cmd {
    /// Check out files for editing
    Checkout {
        #[arg(required = true)]
        paths: Vec<String>,
        /// Lock type
        #[arg(long = "lock", value_parser = ["none", "checkin", "checkout"])]
        lock_type: Option<String>,
        #[arg(long)]
        recursive: bool,
        /// File type specification
        #[arg(long = "type")]
        file_type: Option<String>,
    },
    /// Check in pending changes
    Checkin {
        #[arg(required = true)]
        paths: Vec<String>,
        #[arg(long, short = 'm', value_parser = validate_comment)]
        comment: String,
        #[arg(long)]
        recursive: bool,
        /// Work item to associate (repeatable)
        #[arg(long)]
        associate: Vec<WorkItemId>,
        /// Work item to resolve (repeatable)
        #[arg(long)]
        resolve: Vec<WorkItemId>,
        /// Reason for overriding checkin policy failures
        #[arg(long = "override")]
        override_reason: Option<String>,
    },
    /// Add files to source control
    Add {
        #[arg(required = true)]
        paths: Vec<String>,
        #[arg(long)]
        recursive: bool,
    },
    /// Delete files from source control
    Delete {
        #[arg(required = true)]
        paths: Vec<String>,
        #[arg(long)]
        recursive: bool,
    },
    /// Rename (move) a file
    Rename { old_path: String, new_path: String },
    /// Undo pending changes
    Undo {
        #[arg(required = true)]
        paths: Vec<String>,
        #[arg(long)]
        recursive: bool,
    },
    /// Show pending changes (defaults to the current directory)
    Status {
        paths: Vec<String>,
        #[arg(long)]
        recursive: bool,
    },
    /// Get the latest version (defaults to the current directory)
    GetLatest {
        paths: Vec<String>,
        #[arg(long)]
        recursive: bool,
        /// Overwrite local files even when up to date
        #[arg(long)]
        force: bool,
    },
    /// Create a branch
    Branch {
        source_path: String,
        target_path: String,
        #[arg(long)]
        version: Option<String>,
    },
    /// Merge changes between branches
    Merge {
        source: String,
        target: String,
        #[arg(long)]
        version: Option<String>,
        #[arg(long)]
        recursive: bool,
        #[arg(long)]
        discard: bool,
        #[arg(long)]
        baseless: bool,
    },
    /// Show the history of a file or folder
    History {
        path: String,
        #[arg(long)]
        recursive: bool,
        /// Maximum number of changesets
        #[arg(long = "stopafter")]
        stop_after: Option<u32>,
        /// Version range
        #[arg(long)]
        version: Option<String>,
        /// Only changesets by this user
        #[arg(long)]
        user: Option<String>,
    },
    /// Print workspace information (scraped from `tf workfold /collection`)
    WorkspaceInfo,
    /// Print the status of a single path, echoing the path
    PathStatus { path: String },
    /// Run one operation described as a JSON request (`-` reads stdin)
    Run {
        /// e.g. {"operation":"status","paths":["src"],"working_directory":"C:\\ws"}
        request: String,
    },
    /// Run diagnostics to check environment and configuration
    Doctor,
}

fn optional_paths(paths: Vec<String>) -> Option<Vec<String>> {
    if paths.is_empty() {
        None
    } else {
        Some(paths)
    }
}

impl Cmd {
    /// Operation for the tf-backed subcommands; `None` for the others.
    pub(crate) fn into_operation(self) -> Option<OperationOptions> {
        let op = match self {
            Cmd::Checkout {
                paths,
                lock_type,
                recursive,
                file_type,
            } => OperationOptions::Checkout(CheckoutOptions {
                paths,
                lock_type,
                recursive,
                file_type,
            }),
            Cmd::Checkin {
                paths,
                comment,
                recursive,
                associate,
                resolve,
                override_reason,
            } => OperationOptions::Checkin(CheckinOptions {
                paths,
                comment,
                recursive,
                associate,
                resolve,
                override_reason,
            }),
            Cmd::Add { paths, recursive } => {
                OperationOptions::Add(PathOptions { paths, recursive })
            }
            Cmd::Delete { paths, recursive } => {
                OperationOptions::Delete(PathOptions { paths, recursive })
            }
            Cmd::Rename { old_path, new_path } => {
                OperationOptions::Rename(RenameOptions { old_path, new_path })
            }
            Cmd::Undo { paths, recursive } => {
                OperationOptions::Undo(PathOptions { paths, recursive })
            }
            Cmd::Status { paths, recursive } => OperationOptions::Status(StatusOptions {
                paths: optional_paths(paths),
                recursive,
            }),
            Cmd::GetLatest {
                paths,
                recursive,
                force,
            } => OperationOptions::GetLatest(GetLatestOptions {
                paths: optional_paths(paths),
                recursive,
                force,
            }),
            Cmd::Branch {
                source_path,
                target_path,
                version,
            } => OperationOptions::Branch(BranchOptions {
                source_path,
                target_path,
                version,
            }),
            Cmd::Merge {
                source,
                target,
                version,
                recursive,
                discard,
                baseless,
            } => OperationOptions::Merge(MergeOptions {
                source,
                target,
                version,
                recursive,
                discard,
                baseless,
            }),
            Cmd::History {
                path,
                recursive,
                stop_after,
                version,
                user,
            } => OperationOptions::History(HistoryOptions {
                path,
                recursive,
                stop_after,
                version,
                user,
            }),
            Cmd::WorkspaceInfo | Cmd::PathStatus { .. } | Cmd::Run { .. } | Cmd::Doctor => {
                return None
            }
        };
        Some(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).expect("parse")
    }

    #[test]
    fn checkin_maps_repeatable_work_items_in_order() {
        let cli = parse(&[
            "tfs-bridge",
            "checkin",
            "f.txt",
            "-m",
            "fix bug",
            "--associate",
            "7",
            "--associate",
            "3",
            "--resolve",
            "9",
        ]);
        let op = cli.command.into_operation().expect("operation");
        assert_eq!(
            op.to_args(),
            vec![
                "checkin",
                "/comment:fix bug",
                "/associate:7",
                "/associate:3",
                "/resolve:9",
                "f.txt"
            ]
        );
    }

    #[test]
    fn empty_comment_is_rejected() {
        assert!(Cli::try_parse_from(["tfs-bridge", "checkin", "f", "-m", "  "]).is_err());
    }

    #[test]
    fn status_without_paths_targets_current_dir() {
        let cli = parse(&["tfs-bridge", "status"]);
        let op = cli.command.into_operation().expect("operation");
        assert_eq!(op.to_args(), vec!["status", "."]);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&[
            "tfs-bridge",
            "history",
            "$/P",
            "--stopafter",
            "3",
            "--tf-exe-path",
            "C:\\tools\\tf.exe",
            "--timeout",
            "90s",
        ]);
        assert_eq!(cli.tf_exe_path.as_deref(), Some("C:\\tools\\tf.exe"));
        assert_eq!(cli.timeout, Some(Duration::from_secs(90)));
        let op = cli.command.into_operation().expect("operation");
        assert_eq!(op.to_args(), vec!["history", "$/P", "/stopafter:3"]);
    }

    #[test]
    fn lock_type_is_restricted() {
        assert!(Cli::try_parse_from(["tfs-bridge", "checkout", "a", "--lock", "weird"]).is_err());
    }

    #[test]
    fn non_tf_subcommands_have_no_operation() {
        assert!(parse(&["tfs-bridge", "doctor"]).command.into_operation().is_none());
        assert!(parse(&["tfs-bridge", "workspace-info"])
            .command
            .into_operation()
            .is_none());
    }
}
