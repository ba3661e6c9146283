//! Const declaration shape: `const <id> = { … providers: { … } … }`
//!
//! Scoped to the object literal of a `const` declaration; text before and
//! after the providers block inside the literal is copied unchanged.

use super::{rewrite_providers_blocks, Pass, PassOutput, Splicer};
use crate::engine::scan::Scanner;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConstLiteralPass;

impl Pass for ConstLiteralPass {
    fn name(&self) -> &'static str {
        "const-literal"
    }

    fn apply(&self, text: &str) -> PassOutput {
        let scanner = Scanner::new(text);
        let mut splicer = Splicer::new(text);

        let mut i = 0;
        while i < scanner.len() {
            match const_literal_at(&scanner, i) {
                Some((open, close)) => {
                    rewrite_providers_blocks(&scanner, &mut splicer, open + 1, close);
                    i = close + 1;
                }
                None => i += 1,
            }
        }

        splicer.finish()
    }
}

/// Braces of the object literal in `const <id> = { … }` at `i`
fn const_literal_at(scanner: &Scanner<'_>, i: usize) -> Option<(usize, usize)> {
    if !scanner.word_at(i, "const") {
        return None;
    }
    let id = scanner.ident_at(scanner.skip_trivia(i + "const".len()))?;

    // Optional type annotation: `const config: BridgeConfig = { … }`
    let mut eq = scanner.skip_trivia(id.end);
    if scanner.code_byte(eq) == Some(b':') {
        let ty = scanner.ident_at(scanner.skip_trivia(eq + 1))?;
        eq = scanner.skip_trivia(ty.end);
    }

    if scanner.code_byte(eq) != Some(b'=') || matches!(scanner.code_byte(eq + 1), Some(b'=' | b'>')) {
        return None;
    }
    let open = scanner.skip_trivia(eq + 1);
    let close = scanner.closing_brace(open)?;
    Some((open, close))
}
