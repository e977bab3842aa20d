//! Translate typed operation options into `tf` argument vectors.
//!
//! Semantics
//! - The subcommand token always comes first; output is deterministic and order-stable.
//! - Flags use the literal `/name` or `/name:value` form. Values are passed verbatim, no quoting:
//!   a value containing `:` or spaces reaches `tf` as-is and is subject to its own grammar.
//! - Absent, false and empty options emit nothing; list options emit one flag per element in
//!   input order.
//!
//! Note: tests assert exact ordering; keep it stable when adding flags.

use crate::options::{
    BranchOptions, CheckinOptions, CheckoutOptions, GetLatestOptions, HistoryOptions,
    MergeOptions, OperationOptions, PathOptions, RenameOptions, StatusOptions,
};

/// Path used by status and get when no paths are given.
pub const CURRENT_DIR_PATH: &str = ".";

pub fn build_args(op: &OperationOptions) -> Vec<String> {
    match op {
        OperationOptions::Checkout(o) => checkout_args(o),
        OperationOptions::Checkin(o) => checkin_args(o),
        OperationOptions::Add(o) => add_args(o),
        OperationOptions::Delete(o) => delete_args(o),
        OperationOptions::Rename(o) => rename_args(o),
        OperationOptions::Undo(o) => undo_args(o),
        OperationOptions::Status(o) => status_args(o),
        OperationOptions::GetLatest(o) => get_latest_args(o),
        OperationOptions::Branch(o) => branch_args(o),
        OperationOptions::Merge(o) => merge_args(o),
        OperationOptions::History(o) => history_args(o),
    }
}

fn push_switch(args: &mut Vec<String>, name: &str, on: bool) {
    if on {
        args.push(format!("/{name}"));
    }
}

fn push_value(args: &mut Vec<String>, name: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        args.push(format!("/{name}:{v}"));
    }
}

fn push_paths_or_current(args: &mut Vec<String>, paths: Option<&[String]>) {
    match paths {
        Some(p) if !p.is_empty() => args.extend(p.iter().cloned()),
        _ => args.push(CURRENT_DIR_PATH.to_string()),
    }
}

pub fn checkout_args(o: &CheckoutOptions) -> Vec<String> {
    let mut args = vec!["checkout".to_string()];
    push_value(&mut args, "lock", o.lock_type.as_deref());
    push_switch(&mut args, "recursive", o.recursive);
    push_value(&mut args, "type", o.file_type.as_deref());
    args.extend(o.paths.iter().cloned());
    args
}

pub fn checkin_args(o: &CheckinOptions) -> Vec<String> {
    let mut args = vec!["checkin".to_string()];
    args.push(format!("/comment:{}", o.comment));
    push_switch(&mut args, "recursive", o.recursive);
    for id in &o.associate {
        args.push(format!("/associate:{id}"));
    }
    for id in &o.resolve {
        args.push(format!("/resolve:{id}"));
    }
    push_value(&mut args, "override", o.override_reason.as_deref());
    args.extend(o.paths.iter().cloned());
    args
}

fn recursive_paths_args(subcommand: &str, o: &PathOptions) -> Vec<String> {
    let mut args = vec![subcommand.to_string()];
    push_switch(&mut args, "recursive", o.recursive);
    args.extend(o.paths.iter().cloned());
    args
}

pub fn add_args(o: &PathOptions) -> Vec<String> {
    recursive_paths_args("add", o)
}

pub fn delete_args(o: &PathOptions) -> Vec<String> {
    recursive_paths_args("delete", o)
}

pub fn undo_args(o: &PathOptions) -> Vec<String> {
    recursive_paths_args("undo", o)
}

pub fn rename_args(o: &RenameOptions) -> Vec<String> {
    vec![
        "rename".to_string(),
        o.old_path.clone(),
        o.new_path.clone(),
    ]
}

pub fn status_args(o: &StatusOptions) -> Vec<String> {
    let mut args = vec!["status".to_string()];
    push_switch(&mut args, "recursive", o.recursive);
    push_paths_or_current(&mut args, o.paths.as_deref());
    args
}

pub fn get_latest_args(o: &GetLatestOptions) -> Vec<String> {
    let mut args = vec!["get".to_string()];
    push_switch(&mut args, "recursive", o.recursive);
    push_switch(&mut args, "force", o.force);
    push_paths_or_current(&mut args, o.paths.as_deref());
    args
}

pub fn branch_args(o: &BranchOptions) -> Vec<String> {
    let mut args = vec!["branch".to_string()];
    push_value(&mut args, "version", o.version.as_deref());
    args.push(o.source_path.clone());
    args.push(o.target_path.clone());
    args
}

pub fn merge_args(o: &MergeOptions) -> Vec<String> {
    let mut args = vec!["merge".to_string(), o.source.clone(), o.target.clone()];
    push_value(&mut args, "version", o.version.as_deref());
    push_switch(&mut args, "recursive", o.recursive);
    push_switch(&mut args, "discard", o.discard);
    push_switch(&mut args, "baseless", o.baseless);
    args
}

pub fn history_args(o: &HistoryOptions) -> Vec<String> {
    let mut args = vec!["history".to_string(), o.path.clone()];
    push_switch(&mut args, "recursive", o.recursive);
    if let Some(n) = o.stop_after.filter(|n| *n > 0) {
        args.push(format!("/stopafter:{n}"));
    }
    push_value(&mut args, "version", o.version.as_deref());
    push_value(&mut args, "user", o.user.as_deref());
    args
}

/// Fixed argument vector of the workspace lookup.
pub fn workfold_args() -> Vec<String> {
    vec!["workfold".to_string(), "/collection".to_string()]
}
