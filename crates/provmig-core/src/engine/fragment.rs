//! Provider configuration fragments
//!
//! A fragment is one `<name>: { apiKey: … }` entry found by a matcher. It
//! borrows from the scanned text where it can and lives only until its
//! replacement string has been produced.

use std::borrow::Cow;
use std::ops::Range;

use super::scan::Scanner;

/// Key that holds the nested configuration after migration
pub const NESTED_KEY: &str = "default";

/// Field that marks a provider configuration body
pub const API_KEY_FIELD: &str = "apiKey";

/// A provider entry in the flat shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFragment<'a> {
    /// Provider identifier, e.g. `openai`
    pub name: Cow<'a, str>,
    /// Braced configuration body, copied verbatim, e.g. `{ apiKey: "sk-test" }`
    pub body: Cow<'a, str>,
    /// Range of `<name>: { … }` in the scanned text
    pub span: Range<usize>,
}

impl<'a> ProviderFragment<'a> {
    /// Match the simple inline shape `<name>: { apiKey: <expr> }` at `i`
    ///
    /// The body may contain nested literals of any depth. An entry named
    /// `default` is already nested and never matches.
    pub fn at(scanner: &Scanner<'a>, i: usize) -> Option<Self> {
        let text = scanner.text();
        let key = scanner.key_at(i)?;
        let name = &text[key.name.clone()];
        if name == NESTED_KEY {
            return None;
        }

        let close = scanner.closing_brace(key.value)?;
        let field = scanner.key_at(scanner.skip_trivia(key.value + 1))?;
        if &text[field.name] != API_KEY_FIELD {
            return None;
        }

        Some(Self {
            name: Cow::Borrowed(name),
            body: Cow::Borrowed(&text[key.value..=close]),
            span: i..close + 1,
        })
    }

    /// Build a fragment for a provider whose key is read from the environment
    pub fn from_env(name: &str, var: &str, span: Range<usize>) -> Self {
        Self {
            name: Cow::Owned(name.to_lowercase()),
            body: Cow::Owned(format!("{{ {}: process.env.{} }}", API_KEY_FIELD, var)),
            span,
        }
    }

    /// The nested form, with `indent` as the indentation of the entry's own line
    pub fn render(&self, indent: &str) -> String {
        format!(
            "{name}: {{\n{indent}  {nested}: {body},\n{indent}}}",
            name = self.name,
            indent = indent,
            nested = NESTED_KEY,
            body = self.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_simple_inline() {
        let text = r#"openai: { apiKey: "sk-test" } rest"#;
        let scanner = Scanner::new(text);
        let fragment = ProviderFragment::at(&scanner, 0).unwrap();

        assert_eq!(fragment.name, "openai");
        assert_eq!(fragment.body, r#"{ apiKey: "sk-test" }"#);
        assert_eq!(&text[fragment.span], r#"openai: { apiKey: "sk-test" }"#);
    }

    #[test]
    fn test_nested_body_kept_whole() {
        let text = "azure: { apiKey: k, headers: { 'x-id': '}' } }";
        let scanner = Scanner::new(text);
        let fragment = ProviderFragment::at(&scanner, 0).unwrap();
        assert_eq!(fragment.body, "{ apiKey: k, headers: { 'x-id': '}' } }");
    }

    #[test]
    fn test_rejects_other_shapes() {
        for text in [
            "default: { apiKey: x }",
            "openai: { model: 'gpt-4o', apiKey: x }",
            "openai: { default: { apiKey: x } }",
            "openai: process.env.KEY",
            "openai: { apiKey: x",
            "'openai': { apiKey: x }",
        ] {
            let scanner = Scanner::new(text);
            assert!(ProviderFragment::at(&scanner, 0).is_none(), "{text}");
        }
    }

    #[test]
    fn test_render() {
        let text = r#"openai: { apiKey: "sk-test" }"#;
        let scanner = Scanner::new(text);
        let fragment = ProviderFragment::at(&scanner, 0).unwrap();

        assert_eq!(
            fragment.render("    "),
            "openai: {\n      default: { apiKey: \"sk-test\" },\n    }"
        );
    }

    #[test]
    fn test_from_env() {
        let fragment = ProviderFragment::from_env("OpenAI", "OPENAI_API_KEY", 0..10);
        assert_eq!(fragment.name, "openai");
        assert_eq!(
            fragment.render(""),
            "openai: {\n  default: { apiKey: process.env.OPENAI_API_KEY },\n}"
        );
    }
}
