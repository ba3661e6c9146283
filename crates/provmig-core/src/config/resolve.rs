//! Target list resolution
//!
//! Priority (first match wins):
//! 1. Explicit list file (command line)
//! 2. Workspace list (.config/provmig/targets.yaml)
//! 3. User list (~/.config/provmig/targets.yaml)
//! 4. Built-in fixture list

use std::fmt;
use std::path::{Path, PathBuf};

use super::defaults::default_target_list;
use super::file::{ConfigLevel, FileTargetList, TargetList};
use super::traits::{ConfigResult, TargetListProvider};

/// Where a resolved target list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    File { path: PathBuf, level: ConfigLevel },
    BuiltIn,
}

impl fmt::Display for TargetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSource::File { path, level } => write!(f, "{} ({})", path.display(), level.as_str()),
            TargetSource::BuiltIn => write!(f, "built-in target list"),
        }
    }
}

/// A target list ready for the batch migrator
#[derive(Debug, Clone)]
pub struct ResolvedTargets {
    /// Directory every relative target is joined onto
    pub root: PathBuf,
    /// Targets in processing order
    pub targets: Vec<PathBuf>,
    pub source: TargetSource,
}

impl ResolvedTargets {
    fn from_list(list: TargetList, workspace_root: &Path, source: TargetSource) -> Self {
        let root = match list.root {
            Some(root) => workspace_root.join(root),
            None => workspace_root.to_path_buf(),
        };
        Self {
            root,
            targets: list.targets,
            source,
        }
    }
}

/// Resolve the batch target list for `workspace_root`
///
/// An explicit list that cannot be loaded is an error; workspace and user
/// lists are only consulted when their file exists.
pub fn resolve_target_list(
    explicit: Option<&Path>,
    workspace_root: &Path,
) -> ConfigResult<ResolvedTargets> {
    resolve_with(explicit, workspace_root, Some(FileTargetList::user()))
}

fn resolve_with(
    explicit: Option<&Path>,
    workspace_root: &Path,
    user: Option<FileTargetList>,
) -> ConfigResult<ResolvedTargets> {
    if let Some(path) = explicit {
        let file = FileTargetList::new(path, ConfigLevel::Explicit);
        return load_file(&file, workspace_root);
    }

    let workspace = FileTargetList::workspace(workspace_root);
    if workspace.exists() {
        return load_file(&workspace, workspace_root);
    }

    if let Some(user) = user.filter(FileTargetList::exists) {
        return load_file(&user, workspace_root);
    }

    Ok(ResolvedTargets::from_list(
        default_target_list(),
        workspace_root,
        TargetSource::BuiltIn,
    ))
}

fn load_file(file: &FileTargetList, workspace_root: &Path) -> ConfigResult<ResolvedTargets> {
    let list = file.load()?;
    let source = TargetSource::File {
        path: file.path().to_path_buf(),
        level: file.level(),
    };
    Ok(ResolvedTargets::from_list(list, workspace_root, source))
}
