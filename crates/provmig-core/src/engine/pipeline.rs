//! Ordered pass sequences

use super::guard::is_already_migrated;
use super::passes::{
    ConstLiteralPass, EnvAssignmentPass, Pass, ProvidersBlockPass, ReturnLiteralPass,
    SimpleInlinePass,
};

/// Per-pass accounting for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassStat {
    pub pass: &'static str,
    pub rewrites: usize,
}

/// Result of running a pipeline over one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Rewritten text (identical to the input when nothing matched)
    pub text: String,
    /// Provider entries rewritten across all passes
    pub rewrites: usize,
    pub passes: Vec<PassStat>,
}

/// What the batch pipeline decided for one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Guard matched; no pass ran
    AlreadyMigrated,
    /// Passes ran but produced identical text
    Unchanged,
    /// Passes changed the text
    Updated(Migration),
}

/// A fixed sequence of passes; each pass's output feeds the next
pub struct Pipeline {
    name: &'static str,
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// Build a pipeline from explicit passes
    pub fn new(name: &'static str, passes: Vec<Box<dyn Pass>>) -> Self {
        Self { name, passes }
    }

    /// Full sequence used by the batch migrator
    ///
    /// Providers blocks go first so they are claimed whole; environment and
    /// return shapes catch providers built without a literal block; the const
    /// pass is the broadest and runs last. The simple inline matcher runs
    /// inside the block, return and const passes.
    pub fn batch() -> Self {
        Self::new(
            "batch",
            vec![
                Box::new(ProvidersBlockPass) as Box<dyn Pass>,
                Box::new(EnvAssignmentPass),
                Box::new(ReturnLiteralPass),
                Box::new(ConstLiteralPass),
            ],
        )
    }

    /// Reduced sequence used for ad hoc single-file fixes
    ///
    /// Blocks first, then any flat `<name>: { apiKey: … }` left outside one.
    pub fn single_file() -> Self {
        Self::new(
            "single-file",
            vec![Box::new(ProvidersBlockPass) as Box<dyn Pass>, Box::new(SimpleInlinePass)],
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Names of the passes, in run order
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Thread `text` through every pass in order
    pub fn run(&self, text: &str) -> Migration {
        let mut current = text.to_string();
        let mut stats = Vec::with_capacity(self.passes.len());
        let mut total = 0;

        for pass in &self.passes {
            let output = pass.apply(&current);
            crate::debug_log!("{}/{}: {} rewrite(s)", self.name, pass.name(), output.rewrites);
            total += output.rewrites;
            stats.push(PassStat {
                pass: pass.name(),
                rewrites: output.rewrites,
            });
            current = output.text;
        }

        Migration {
            text: current,
            rewrites: total,
            passes: stats,
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("passes", &self.pass_names())
            .finish()
    }
}

/// Guard plus the batch pipeline
pub fn migrate_source(text: &str) -> MigrationOutcome {
    migrate_with(&Pipeline::batch(), text)
}

/// Guard plus an arbitrary pipeline
pub fn migrate_with(pipeline: &Pipeline, text: &str) -> MigrationOutcome {
    if is_already_migrated(text) {
        return MigrationOutcome::AlreadyMigrated;
    }

    let migration = pipeline.run(text);
    if migration.text == text {
        MigrationOutcome::Unchanged
    } else {
        MigrationOutcome::Updated(migration)
    }
}
