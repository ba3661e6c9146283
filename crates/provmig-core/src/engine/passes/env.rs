//! Environment shape: `<name>: process.env.<VAR>`

use super::{Pass, PassOutput, Splicer};
use crate::engine::fragment::{ProviderFragment, API_KEY_FIELD, NESTED_KEY};
use crate::engine::scan::Scanner;

const ENV_PREFIX: &str = "process.env.";

/// Turns a provider read straight from the environment into a nested config
///
/// The provider name is lower-cased and a non-null assertion (`X!`) moves into
/// the nested body. `apiKey: process.env.X` is a config field, not a provider,
/// and is left alone, as is a ternary arm (`cond ? a : process.env.X`) and any
/// field of a provider configuration body (`baseURL: process.env.URL`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAssignmentPass;

impl Pass for EnvAssignmentPass {
    fn name(&self) -> &'static str {
        "env-assignment"
    }

    fn apply(&self, text: &str) -> PassOutput {
        let scanner = Scanner::new(text);
        let mut splicer = Splicer::new(text);

        let mut i = 0;
        while i < scanner.len() {
            match env_fragment_at(&scanner, i) {
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

fn env_fragment_at<'a>(scanner: &Scanner<'a>, i: usize) -> Option<ProviderFragment<'a>> {
    let text = scanner.text();
    let key = scanner.key_at(i)?;
    let name = &text[key.name];
    if name.eq_ignore_ascii_case(API_KEY_FIELD) || name == NESTED_KEY {
        return None;
    }
    if scanner.preceding_code_byte(i) == Some(b'?') {
        return None;
    }

    if !scanner.word_at(key.value, "process") || !text[key.value..].starts_with(ENV_PREFIX) {
        return None;
    }
    let var = scanner.ident_at(key.value + ENV_PREFIX.len())?;
    if in_config_body(scanner, i) {
        return None;
    }

    let non_null = scanner.code_byte(var.end) == Some(b'!')
        && scanner.code_byte(var.end + 1) != Some(b'=');
    let end = if non_null { var.end + 1 } else { var.end };

    Some(ProviderFragment::from_env(name, &text[var.start..end], i..end))
}

/// Whether `i` sits directly inside a provider configuration body: an object
/// led by `apiKey`, or the value of a `default` key.
fn in_config_body(scanner: &Scanner<'_>, i: usize) -> bool {
    let text = scanner.text();
    let Some(open) = scanner.enclosing_brace(i) else {
        return false;
    };

    let led_by_api_key = scanner
        .key_at(scanner.skip_trivia(open + 1))
        .is_some_and(|field| &text[field.name] == API_KEY_FIELD);
    led_by_api_key || scanner.key_before(open).is_some_and(|key| &text[key] == NESTED_KEY)
}
