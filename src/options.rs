//! Typed operation options, one record per `tf` subcommand.
//!
//! Records deserialize from the same JSON field names the RPC tools accept; boolean flags
//! default to false and optional values default to absent.

use serde::{de, Deserialize, Deserializer, Serialize};

pub type WorkItemId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    pub paths: Vec<String>,
    /// none | checkin | checkout
    #[serde(default)]
    pub lock_type: Option<String>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default, alias = "type")]
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinOptions {
    pub paths: Vec<String>,
    /// Required; blank comments are rejected.
    #[serde(deserialize_with = "non_blank")]
    pub comment: String,
    #[serde(default)]
    pub recursive: bool,
    /// Work items linked to the changeset.
    #[serde(default)]
    pub associate: Vec<WorkItemId>,
    /// Work items resolved by the changeset.
    #[serde(default)]
    pub resolve: Vec<WorkItemId>,
    /// Reason for overriding checkin policy failures.
    #[serde(default, alias = "override")]
    pub override_reason: Option<String>,
}

fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(de::Error::custom("checkin comment must not be empty"));
    }
    Ok(s)
}

/// Shared shape of add, delete and undo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    pub paths: Vec<String>,
    #[serde(default)]
    pub recursive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOptions {
    pub old_path: String,
    pub new_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOptions {
    #[serde(default)]
    pub paths: Option<Vec<String>>,
    #[serde(default)]
    pub recursive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLatestOptions {
    #[serde(default)]
    pub paths: Option<Vec<String>>,
    #[serde(default)]
    pub recursive: bool,
    /// Overwrite local files even when they are up to date.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOptions {
    pub source_path: String,
    pub target_path: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub discard: bool,
    #[serde(default)]
    pub baseless: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryOptions {
    pub path: String,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default, alias = "stopafter")]
    pub stop_after: Option<u32>,
    /// Version range, e.g. `C100~C200`.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

/// One operation request, tagged by `operation` when read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum OperationOptions {
    Checkout(CheckoutOptions),
    Checkin(CheckinOptions),
    Add(PathOptions),
    Delete(PathOptions),
    Rename(RenameOptions),
    Undo(PathOptions),
    Status(StatusOptions),
    GetLatest(GetLatestOptions),
    Branch(BranchOptions),
    Merge(MergeOptions),
    History(HistoryOptions),
}

impl OperationOptions {
    /// Stable operation name used in logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            OperationOptions::Checkout(_) => "checkout",
            OperationOptions::Checkin(_) => "checkin",
            OperationOptions::Add(_) => "add",
            OperationOptions::Delete(_) => "delete",
            OperationOptions::Rename(_) => "rename",
            OperationOptions::Undo(_) => "undo",
            OperationOptions::Status(_) => "status",
            OperationOptions::GetLatest(_) => "get-latest",
            OperationOptions::Branch(_) => "branch",
            OperationOptions::Merge(_) => "merge",
            OperationOptions::History(_) => "history",
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        crate::translate::build_args(self)
    }
}
