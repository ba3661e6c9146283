//! Object literal rewriting shared by the block, return and const passes

use std::ops::Range;

use super::fragment::ProviderFragment;
use super::scan::Scanner;

/// Rebuild the object literal spanning `open..=close`
///
/// Every entry that is a provider fragment is nested under `default`; other
/// entries (spreads, helper calls, already nested providers, comments) are
/// kept verbatim in their original order. Returns the new `{ … }` text and
/// the number of fragments rewritten, or `None` when no entry is a fragment.
pub(crate) fn rewrite_object(
    scanner: &Scanner<'_>,
    open: usize,
    close: usize,
    indent: &str,
) -> Option<(String, usize)> {
    let text = scanner.text();
    let entries = scanner.split_entries(open + 1, close);
    let fragments: Vec<Option<ProviderFragment<'_>>> = entries
        .iter()
        .map(|entry| entry_fragment(scanner, entry))
        .collect();

    let count = fragments.iter().flatten().count();
    if count == 0 {
        return None;
    }

    let inner = format!("{indent}  ");
    let mut out = String::from("{\n");
    for (entry, fragment) in entries.iter().zip(&fragments) {
        out.push_str(&inner);
        match fragment {
            Some(fragment) => {
                out.push_str(&text[entry.start..fragment.span.start]);
                out.push_str(&fragment.render(&inner));
                out.push_str(&text[fragment.span.end..entry.end]);
            }
            None => out.push_str(&text[entry.clone()]),
        }
        out.push_str(",\n");
    }
    out.push_str(indent);
    out.push('}');

    Some((out, count))
}

/// The entry as a fragment, if the fragment covers all of its code
fn entry_fragment<'a>(scanner: &Scanner<'a>, entry: &Range<usize>) -> Option<ProviderFragment<'a>> {
    let start = scanner.skip_trivia(entry.start);
    let end = scanner.trim_trivia_end(entry.start, entry.end);
    ProviderFragment::at(scanner, start).filter(|fragment| fragment.span.end == end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str) -> Option<(String, usize)> {
        let scanner = Scanner::new(text);
        let open = text.find('{').unwrap();
        let close = scanner.closing_brace(open).unwrap();
        rewrite_object(&scanner, open, close, "")
    }

    #[test]
    fn test_rewrites_every_fragment_in_order() {
        let (out, count) = rewrite("{ openai: { apiKey: a }, anthropic: { apiKey: b } }").unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            out,
            "{\n  openai: {\n    default: { apiKey: a },\n  },\n  anthropic: {\n    default: { apiKey: b },\n  },\n}"
        );
    }

    #[test]
    fn test_keeps_other_entries_verbatim() {
        let (out, count) = rewrite(
            "{ ...base, openai: { apiKey: a }, google: googleConfig(), xai: { default: { apiKey: c } } }",
        )
        .unwrap();

        assert_eq!(count, 1);
        assert!(out.contains("  ...base,\n"));
        assert!(out.contains("  google: googleConfig(),\n"));
        assert!(out.contains("  xai: { default: { apiKey: c } },\n"));
        assert!(out.find("...base").unwrap() < out.find("openai").unwrap());
        assert!(out.find("openai").unwrap() < out.find("google").unwrap());
    }

    #[test]
    fn test_keeps_leading_comment() {
        let (out, _) = rewrite("{\n  // primary\n  openai: { apiKey: a },\n}").unwrap();
        assert!(out.contains("// primary\n  openai: {\n    default: { apiKey: a },"));
    }

    #[test]
    fn test_no_fragments_is_none() {
        assert!(rewrite("{ openai: someHelper(), model: 'gpt-4o' }").is_none());
        assert!(rewrite("{}").is_none());
    }

    #[test]
    fn test_trailing_code_disqualifies_entry() {
        assert!(rewrite("{ openai: { apiKey: a } as Config }").is_none());
    }
}
