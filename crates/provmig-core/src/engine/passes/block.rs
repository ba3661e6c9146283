//! Providers block shape: `providers: { <name>: { apiKey: … }, … }`

use super::{rewrite_providers_blocks, Pass, PassOutput, Splicer};
use crate::engine::scan::Scanner;

/// Claims whole `providers` blocks, nesting each provider entry
///
/// Blocks without any flat provider entry are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvidersBlockPass;

impl Pass for ProvidersBlockPass {
    fn name(&self) -> &'static str {
        "providers-block"
    }

    fn apply(&self, text: &str) -> PassOutput {
        let scanner = Scanner::new(text);
        let mut splicer = Splicer::new(text);
        rewrite_providers_blocks(&scanner, &mut splicer, 0, scanner.len());
        splicer.finish()
    }
}
