//! File-based target list provider (YAML)
//!
//! Supports user-level (`<config dir>/provmig/targets.yaml`) and
//! workspace-level (`.config/provmig/targets.yaml`) lists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::traits::{ConfigError, ConfigResult, TargetListProvider};

/// Target list file structure
///
/// ```yaml
/// root: packages/bridge
/// targets:
///   - src/index.ts
///   - src/client/index.ts
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct TargetList {
    /// Directory relative targets are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Files to migrate, processed in order
    #[serde(default)]
    pub targets: Vec<PathBuf>,
}

/// Config level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// Path given on the command line
    Explicit,
    /// Workspace-level list (.config/provmig/targets.yaml)
    Workspace,
    /// User-level list (~/.config/provmig/targets.yaml)
    User,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::Explicit => "explicit",
            ConfigLevel::Workspace => "workspace",
            ConfigLevel::User => "user",
        }
    }
}

/// YAML target list file
///
/// # Example
///
/// ```no_run
/// use provmig_core::config::{FileTargetList, TargetListProvider};
///
/// let workspace = FileTargetList::workspace("/path/to/repo");
/// if workspace.exists() {
///     let list = workspace.load().unwrap();
///     println!("{} target(s)", list.targets.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileTargetList {
    path: PathBuf,
    level: ConfigLevel,
}

impl FileTargetList {
    /// Create a provider for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// User-level list (`<config dir>/provmig/targets.yaml`)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("provmig").join("targets.yaml"), ConfigLevel::User)
    }

    /// Workspace-level list (`.config/provmig/targets.yaml`)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root
            .as_ref()
            .join(".config")
            .join("provmig")
            .join("targets.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    /// Get the list file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the config level
    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    /// Check if the list file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl TargetListProvider for FileTargetList {
    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.level.as_str())
    }

    fn load(&self) -> ConfigResult<TargetList> {
        if !self.exists() {
            return Err(ConfigError::NotFound(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        let list: TargetList = serde_yaml::from_str(&content)?;

        if list.targets.is_empty() {
            return Err(ConfigError::Other(format!(
                "{} lists no targets",
                self.path.display()
            )));
        }

        Ok(list)
    }
}
