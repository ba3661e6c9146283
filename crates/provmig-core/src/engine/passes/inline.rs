//! Simple inline shape: `<name>: { apiKey: <expr> }` anywhere in the text

use super::{Pass, PassOutput, Splicer};
use crate::engine::fragment::ProviderFragment;
use crate::engine::scan::Scanner;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInlinePass;

impl Pass for SimpleInlinePass {
    fn name(&self) -> &'static str {
        "simple-inline"
    }

    fn apply(&self, text: &str) -> PassOutput {
        let scanner = Scanner::new(text);
        let mut splicer = Splicer::new(text);

        let mut i = 0;
        while i < scanner.len() {
            match ProviderFragment::at(&scanner, i) {
                Some(fragment) => {
                    let rendered = fragment.render(scanner.line_indent(i));
                    splicer.replace(fragment.span.clone(), &rendered, 1);
                    i = fragment.span.end;
                }
                None => i += 1,
            }
        }

        splicer.finish()
    }
}
