//! Batch run reports

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Outcome for one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Rewritten and written back
    Updated { rewrites: usize },
    /// Passes ran, nothing matched
    Unchanged,
    /// Skipped by the already-migrated guard
    AlreadyMigrated,
    NotFound,
    /// Read or write failed
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Target as listed (before joining onto the root)
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Per-status counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub already_migrated: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} updated, {} unchanged, {} already migrated, {} not found, {} failed",
            self.updated, self.unchanged, self.already_migrated, self.not_found, self.failed
        )
    }
}

/// Everything a batch run did, in target order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn from_files(files: Vec<FileReport>) -> Self {
        let mut summary = BatchSummary::default();
        for file in &files {
            match file.status {
                FileStatus::Updated { .. } => summary.updated += 1,
                FileStatus::Unchanged => summary.unchanged += 1,
                FileStatus::AlreadyMigrated => summary.already_migrated += 1,
                FileStatus::NotFound => summary.not_found += 1,
                FileStatus::Failed { .. } => summary.failed += 1,
            }
        }
        Self { files, summary }
    }

    /// Status recorded for `path`, if it was a target
    pub fn status_of(&self, path: impl Into<PathBuf>) -> Option<&FileStatus> {
        let path = path.into();
        self.files.iter().find(|f| f.path == path).map(|f| &f.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> BatchReport {
        BatchReport::from_files(vec![
            FileReport { path: "a.ts".into(), status: FileStatus::Updated { rewrites: 2 } },
            FileReport { path: "b.ts".into(), status: FileStatus::NotFound },
            FileReport { path: "c.ts".into(), status: FileStatus::Failed { error: "denied".into() } },
            FileReport { path: "d.ts".into(), status: FileStatus::Updated { rewrites: 1 } },
        ])
    }

    #[test]
    fn test_summary_counts() {
        let report = report();
        assert_eq!(report.summary.updated, 2);
        assert_eq!(report.summary.not_found, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(
            report.summary.to_string(),
            "2 updated, 0 unchanged, 0 already migrated, 1 not found, 1 failed"
        );
        assert_eq!(report.status_of("b.ts"), Some(&FileStatus::NotFound));
        assert_eq!(report.status_of("z.ts"), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report()).unwrap();

        assert_eq!(json["files"][0]["path"], "a.ts");
        assert_eq!(json["files"][0]["status"], "updated");
        assert_eq!(json["files"][0]["rewrites"], 2);
        assert_eq!(json["files"][1]["status"], "not_found");
        assert_eq!(json["files"][2]["error"], "denied");
        assert_eq!(json["summary"]["updated"], 2);
    }
}
