//! Batch migrator
//!
//! Processes an explicit target list in order. Every per-file failure is
//! caught here, logged with the target's path and recorded in the report;
//! the run itself never fails.

use std::fs;
use std::path::{Path, PathBuf};

use super::report::{BatchReport, FileReport, FileStatus};
use crate::config::{ResolvedTargets, TargetListProvider};
use crate::engine::{is_already_migrated, Pipeline};
use crate::error::{MigrateError, MigrateResult};
use crate::logging::SharedLogger;
use crate::{log_debug, log_error, log_info};

/// Migrates a list of files with the guard and the full pass sequence
pub struct BatchMigrator {
    root: PathBuf,
    targets: Vec<PathBuf>,
    pipeline: Pipeline,
    logger: SharedLogger,
}

impl BatchMigrator {
    /// Create a migrator for `targets`, each resolved against `root`
    pub fn new(root: impl Into<PathBuf>, targets: Vec<PathBuf>, logger: SharedLogger) -> Self {
        Self {
            root: root.into(),
            targets,
            pipeline: Pipeline::batch(),
            logger,
        }
    }

    /// Create a migrator from a resolved target list
    pub fn from_resolved(resolved: ResolvedTargets, logger: SharedLogger) -> Self {
        Self::new(resolved.root, resolved.targets, logger)
    }

    /// Load the target list from `provider`
    ///
    /// A list without its own root is resolved against `workspace_root`.
    pub fn from_provider(
        provider: &dyn TargetListProvider,
        workspace_root: &Path,
        logger: SharedLogger,
    ) -> MigrateResult<Self> {
        let list = provider.load()?;
        log_debug!(logger, "Loaded {} target(s) from {}", list.targets.len(), provider.describe());
        let root = match list.root {
            Some(root) => workspace_root.join(root),
            None => workspace_root.to_path_buf(),
        };
        Ok(Self::new(root, list.targets, logger))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Process every target in order
    pub fn run(&self) -> BatchReport {
        let files = self
            .targets
            .iter()
            .map(|target| FileReport {
                path: target.clone(),
                status: self.process(target),
            })
            .collect();

        let report = BatchReport::from_files(files);
        log_debug!(self.logger, "Batch finished: {}", report.summary);
        report
    }

    fn process(&self, target: &Path) -> FileStatus {
        match self.migrate(target) {
            Ok(status) => status,
            Err(err) if err.is_not_found() => {
                log_info!(self.logger, "Skipping {} (not found)", target.display());
                FileStatus::NotFound
            }
            Err(err) => {
                log_error!(self.logger, "Error processing {}: {}", target.display(), err);
                FileStatus::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    fn migrate(&self, target: &Path) -> MigrateResult<FileStatus> {
        let path = self.root.join(target);
        let original = fs::read_to_string(&path).map_err(|e| MigrateError::io(&path, e))?;

        if is_already_migrated(&original) {
            log_info!(self.logger, "Skipping {} (already migrated)", target.display());
            return Ok(FileStatus::AlreadyMigrated);
        }

        log_info!(self.logger, "Processing {}...", target.display());
        let migration = self.pipeline.run(&original);

        if migration.text == original {
            log_info!(self.logger, "No changes needed for {}", target.display());
            return Ok(FileStatus::Unchanged);
        }

        fs::write(&path, &migration.text).map_err(|e| MigrateError::io(&path, e))?;
        log_info!(self.logger, "Updated {}", target.display());
        Ok(FileStatus::Updated {
            rewrites: migration.rewrites,
        })
    }
}

impl std::fmt::Debug for BatchMigrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchMigrator")
            .field("root", &self.root)
            .field("targets", &self.targets.len())
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
