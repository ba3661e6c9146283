//! Rewrite passes
//!
//! Each pass recognizes one syntactic shape and rewrites every occurrence in a
//! single left-to-right scan. Output is built into a fresh buffer, so text a
//! pass inserts is never matched again by the same pass.

mod inline;
mod block;
mod env;
mod return_literal;
mod const_literal;

pub use inline::SimpleInlinePass;
pub use block::ProvidersBlockPass;
pub use env::EnvAssignmentPass;
pub use return_literal::ReturnLiteralPass;
pub use const_literal::ConstLiteralPass;

use std::ops::Range;

use super::object::rewrite_object;
use super::scan::Scanner;

/// Key introducing a provider map
pub const PROVIDERS_KEY: &str = "providers";

/// A string-to-string rewrite over a whole source text
pub trait Pass: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Rewrite every match in `text`
    fn apply(&self, text: &str) -> PassOutput;
}

/// Result of running one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutput {
    pub text: String,
    /// Provider entries rewritten by this pass
    pub rewrites: usize,
}

/// Copies the source into a new buffer, substituting replaced ranges
struct Splicer<'a> {
    source: &'a str,
    out: String,
    cursor: usize,
    rewrites: usize,
}

impl<'a> Splicer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            out: String::with_capacity(source.len()),
            cursor: 0,
            rewrites: 0,
        }
    }

    /// Replace `range` (which must not start before earlier replacements end)
    fn replace(&mut self, range: Range<usize>, replacement: &str, rewrites: usize) {
        debug_assert!(range.start >= self.cursor, "overlapping replacement");
        self.out.push_str(&self.source[self.cursor..range.start]);
        self.out.push_str(replacement);
        self.cursor = range.end;
        self.rewrites += rewrites;
    }

    fn finish(mut self) -> PassOutput {
        self.out.push_str(&self.source[self.cursor..]);
        PassOutput {
            text: self.out,
            rewrites: self.rewrites,
        }
    }
}

/// Rewrite every `providers: { … }` block that starts inside `start..end`
fn rewrite_providers_blocks(
    scanner: &Scanner<'_>,
    splicer: &mut Splicer<'_>,
    start: usize,
    end: usize,
) {
    let mut i = start;
    while i < end {
        if let Some((open, close)) = providers_block_at(scanner, i).filter(|&(_, close)| close < end) {
            let indent = scanner.line_indent(i);
            if let Some((replacement, count)) = rewrite_object(scanner, open, close, indent) {
                crate::trace_log!("providers block at {}: {} fragment(s)", i, count);
                splicer.replace(open..close + 1, &replacement, count);
                i = close + 1;
                continue;
            }
        }
        i += 1;
    }
}

/// The braces of a `providers: { … }` value keyed at `i`
fn providers_block_at(scanner: &Scanner<'_>, i: usize) -> Option<(usize, usize)> {
    if !scanner.word_at(i, PROVIDERS_KEY) {
        return None;
    }
    let key = scanner.key_at(i)?;
    let close = scanner.closing_brace(key.value)?;
    Some((key.value, close))
}
