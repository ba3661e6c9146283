//! Target list provider trait

use super::file::TargetList;

/// Source of the batch migrator's target list
///
/// Implementations:
/// - `MemoryTargetList`: In-memory list
/// - `FileTargetList`: YAML file (`targets.yaml`)
pub trait TargetListProvider: Send + Sync {
    /// Human-readable description of where the list comes from
    fn describe(&self) -> String;

    /// Load the target list
    fn load(&self) -> ConfigResult<TargetList>;
}

/// Errors that can occur while loading a target list
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Target list not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
