//! Migration error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while migrating a file
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Target file does not exist
    #[error("No such file: {}", path.display())]
    NotFound { path: PathBuf },

    /// Read or write failed for any other reason
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Target list could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MigrateError {
    /// Classify an I/O error for `path`, splitting out the not-found case
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Whether this error means the target was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type MigrateResult<T> = Result<T, MigrateError>;
