//! Driver pipelines: read, migrate, write back
//!
//! - [`BatchMigrator`]: many targets, guard + full pipeline, fail-soft
//! - [`migrate_file`]: one target, reduced pipeline, errors propagate

mod report;
mod batch;
mod single;

pub use report::{BatchReport, BatchSummary, FileReport, FileStatus};
pub use batch::BatchMigrator;
pub use single::migrate_file;
