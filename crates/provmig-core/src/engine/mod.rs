//! Pattern rewrite engine
//!
//! Migrates provider configs from `<name>: { apiKey }` to
//! `<name>: { default: { apiKey } }` by pure text rewriting. Nothing is
//! parsed into a tree: a [`scan::Scanner`] classifies bytes and matches
//! braces, each pass rewrites one syntactic shape, and a [`Pipeline`] threads
//! a text through its passes in a fixed order.
//!
//! ```
//! use provmig_core::engine::{migrate_source, MigrationOutcome};
//!
//! let outcome = migrate_source(r#"providers: { openai: { apiKey: "sk-test" } }"#);
//! match outcome {
//!     MigrationOutcome::Updated(m) => assert!(m.text.contains("default: {")),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod scan;
pub mod fragment;
pub mod passes;
mod object;
mod guard;
mod pipeline;

pub use fragment::ProviderFragment;
pub use guard::is_already_migrated;
pub use passes::{
    ConstLiteralPass, EnvAssignmentPass, Pass, PassOutput, ProvidersBlockPass, ReturnLiteralPass,
    SimpleInlinePass,
};
pub use pipeline::{migrate_source, migrate_with, Migration, MigrationOutcome, PassStat, Pipeline};
