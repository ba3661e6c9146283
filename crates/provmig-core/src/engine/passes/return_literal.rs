//! Return shape: `return { <name>: { apiKey: … } }` in config helper functions

use super::{Pass, PassOutput, Splicer};
use crate::engine::object::rewrite_object;
use crate::engine::scan::Scanner;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnLiteralPass;

impl Pass for ReturnLiteralPass {
    fn name(&self) -> &'static str {
        "return-literal"
    }

    fn apply(&self, text: &str) -> PassOutput {
        let scanner = Scanner::new(text);
        let mut splicer = Splicer::new(text);

        let mut i = 0;
        while i < scanner.len() {
            if scanner.word_at(i, "return") {
                let open = scanner.skip_trivia(i + "return".len());
                if let Some(close) = scanner.closing_brace(open) {
                    let indent = scanner.line_indent(i);
                    if let Some((replacement, count)) = rewrite_object(&scanner, open, close, indent) {
                        splicer.replace(open..close + 1, &replacement, count);
                        i = close + 1;
                        continue;
                    }
                }
            }
            i += 1;
        }

        splicer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_literal() {
        let text = "export function openAIConfig() {\n  return { openai: { apiKey: process.env.OPENAI_API_KEY! } };\n}\n";
        let out = ReturnLiteralPass.apply(text);

        assert_eq!(out.rewrites, 1);
        assert_eq!(
            out.text,
            "export function openAIConfig() {\n  return {\n    openai: {\n      default: { apiKey: process.env.OPENAI_API_KEY! },\n    },\n  };\n}\n"
        );
    }

    #[test]
    fn test_other_returns_untouched() {
        for text in [
            "return { model: 'gpt-4o', apiKey: key };",
            "return { providers: { openai: { default: { apiKey: k } } } };",
            "return config;",
            "returnValue = { openai: { apiKey: k } };",
        ] {
            let out = ReturnLiteralPass.apply(text);
            assert_eq!(out.rewrites, 0, "{text}");
            assert_eq!(out.text, text);
        }
    }
}
