//! provmig core
//!
//! Rewrites provider configuration literals in TypeScript/JavaScript sources
//! from the flat shape to the nested shape:
//!
//! ```text
//! providers: { openai: { apiKey: "sk-test" } }
//! ```
//!
//! becomes
//!
//! ```text
//! providers: {
//!   openai: {
//!     default: { apiKey: "sk-test" },
//!   },
//! }
//! ```
//!
//! The rewrite is textual: nothing is parsed into a tree and the rewritten
//! text is not validated. Two drivers wrap the [`engine`]:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use provmig_core::{BatchMigrator, ConsoleLogger, resolve_target_list};
//!
//! let targets = resolve_target_list(None, Path::new(".")).unwrap();
//! let report = BatchMigrator::from_resolved(targets, Arc::new(ConsoleLogger::new())).run();
//! println!("{}", report.summary);
//! ```

pub mod logging;
pub mod config;
pub mod engine;
pub mod driver;
mod error;

pub use error::{MigrateError, MigrateResult};

pub use engine::{
    is_already_migrated, migrate_source, Migration, MigrationOutcome, Pass, Pipeline,
    ProviderFragment,
};

pub use driver::{migrate_file, BatchMigrator, BatchReport, BatchSummary, FileReport, FileStatus};

pub use config::{
    resolve_target_list, ConfigError, FileTargetList, MemoryTargetList, ResolvedTargets,
    TargetList, TargetListProvider, TargetSource,
};

pub use logging::{ConsoleLogger, Logger, MemoryLogger, NoOpLogger, SharedLogger};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
