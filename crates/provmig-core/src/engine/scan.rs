//! Lexical scanner over JavaScript/TypeScript source text
//!
//! Every byte is classified once as code, string literal or comment. Matchers
//! only ever look at code bytes, so braces and keys inside `"…"`, `'…'`,
//! `` `…` ``, `// …` and `/* … */` are invisible to them. Brace matching is a
//! plain depth counter, so literals of any nesting depth are handled.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lex {
    Code,
    Literal,
    Comment,
}

/// Identifier bytes: `[A-Za-z0-9_$]` plus any byte of a non-ASCII character
///
/// Treating every non-ASCII byte as part of a word keeps Unicode keys such as
/// `ñx` whole, and identifier ranges always end on a char boundary.
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || !b.is_ascii()
}

/// An object key: `<name> :` followed by the start of its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Range of the identifier
    pub name: Range<usize>,
    /// First non-trivia byte after the colon
    pub value: usize,
}

/// Classified view of a source text
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    lex: Vec<Lex>,
}

impl<'a> Scanner<'a> {
    /// Classify every byte of `text`
    pub fn new(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut lex = vec![Lex::Code; bytes.len()];
        let mut i = 0;

        while i < bytes.len() {
            let (end, kind) = match bytes[i] {
                quote @ (b'"' | b'\'' | b'`') => (literal_end(bytes, i, quote), Lex::Literal),
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    let end = text[i..].find('\n').map_or(bytes.len(), |p| i + p);
                    (end, Lex::Comment)
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    let end = text[i + 2..].find("*/").map_or(bytes.len(), |p| i + 2 + p + 2);
                    (end, Lex::Comment)
                }
                _ => {
                    i += 1;
                    continue;
                }
            };
            lex[i..end].fill(kind);
            i = end;
        }

        Self { text, lex }
    }

    /// The scanned text
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether byte `i` is code (outside strings and comments)
    pub fn is_code(&self, i: usize) -> bool {
        self.lex.get(i) == Some(&Lex::Code)
    }

    /// The byte at `i` if it is code
    pub fn code_byte(&self, i: usize) -> Option<u8> {
        self.is_code(i).then(|| self.text.as_bytes()[i])
    }

    fn is_trivia(&self, i: usize) -> bool {
        match self.lex[i] {
            Lex::Comment => true,
            Lex::Code => self.text.as_bytes()[i].is_ascii_whitespace(),
            Lex::Literal => false,
        }
    }

    /// First position at or after `i` that is not whitespace or comment
    pub fn skip_trivia(&self, mut i: usize) -> usize {
        while i < self.len() && self.is_trivia(i) {
            i += 1;
        }
        i
    }

    /// Shrink `start..end` from the right past whitespace and comments
    pub fn trim_trivia_end(&self, start: usize, mut end: usize) -> usize {
        while end > start && self.is_trivia(end - 1) {
            end -= 1;
        }
        end
    }

    /// Last code byte before `i`, ignoring trivia
    pub fn preceding_code_byte(&self, i: usize) -> Option<u8> {
        match self.trim_trivia_end(0, i) {
            0 => None,
            j => self.code_byte(j - 1),
        }
    }

    /// Identifier starting exactly at `i` (not in the middle of a word)
    pub fn ident_at(&self, i: usize) -> Option<Range<usize>> {
        let bytes = self.text.as_bytes();
        if !self.is_code(i) || !is_ident_byte(bytes[i]) {
            return None;
        }
        if i > 0 && self.is_code(i - 1) && is_ident_byte(bytes[i - 1]) {
            return None;
        }

        let mut end = i;
        while end < bytes.len() && self.is_code(end) && is_ident_byte(bytes[end]) {
            end += 1;
        }
        Some(i..end)
    }

    /// Whether the identifier at `i` is exactly `word`
    pub fn word_at(&self, i: usize, word: &str) -> bool {
        self.ident_at(i).is_some_and(|r| &self.text[r] == word)
    }

    /// An object key `<ident>:` starting at `i`
    ///
    /// `a::b` is not a key.
    pub fn key_at(&self, i: usize) -> Option<Key> {
        let name = self.ident_at(i)?;
        let colon = self.skip_trivia(name.end);
        if self.code_byte(colon) != Some(b':') || self.code_byte(colon + 1) == Some(b':') {
            return None;
        }
        Some(Key {
            name,
            value: self.skip_trivia(colon + 1),
        })
    }

    /// Index of the `}` matching the `{` at `open`
    pub fn closing_brace(&self, open: usize) -> Option<usize> {
        if self.code_byte(open) != Some(b'{') {
            return None;
        }

        let bytes = self.text.as_bytes();
        let mut depth = 0usize;
        for i in open..bytes.len() {
            if !self.is_code(i) {
                continue;
            }
            match bytes[i] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Index of the `{` opening the innermost braced block containing `i`
    pub fn enclosing_brace(&self, i: usize) -> Option<usize> {
        let mut depth = 0usize;
        for j in (0..i.min(self.len())).rev() {
            match self.code_byte(j) {
                Some(b'}') => depth += 1,
                Some(b'{') if depth == 0 => return Some(j),
                Some(b'{') => depth -= 1,
                _ => {}
            }
        }
        None
    }

    /// Identifier of the key whose value starts at `value`, as in `<ident>: {`
    pub fn key_before(&self, value: usize) -> Option<Range<usize>> {
        let colon = self.trim_trivia_end(0, value);
        if colon == 0 || self.code_byte(colon - 1) != Some(b':') {
            return None;
        }

        let bytes = self.text.as_bytes();
        let end = self.trim_trivia_end(0, colon - 1);
        let mut start = end;
        while start > 0 && self.is_code(start - 1) && is_ident_byte(bytes[start - 1]) {
            start -= 1;
        }
        (start < end).then(|| start..end)
    }

    /// Split an object body at its top-level commas
    ///
    /// Returned ranges are trimmed of surrounding whitespace; empty segments
    /// (such as after a trailing comma) are dropped.
    pub fn split_entries(&self, start: usize, end: usize) -> Vec<Range<usize>> {
        let bytes = self.text.as_bytes();
        let mut entries = Vec::new();
        let mut depth = 0i32;
        let mut segment = start;

        for i in start..end {
            if !self.is_code(i) {
                continue;
            }
            match bytes[i] {
                b'{' | b'[' | b'(' => depth += 1,
                b'}' | b']' | b')' => depth -= 1,
                b',' if depth == 0 => {
                    self.push_trimmed(&mut entries, segment, i);
                    segment = i + 1;
                }
                _ => {}
            }
        }
        self.push_trimmed(&mut entries, segment, end);
        entries
    }

    fn push_trimmed(&self, entries: &mut Vec<Range<usize>>, start: usize, end: usize) {
        let slice = &self.text[start..end];
        let lead = slice.len() - slice.trim_start().len();
        let len = slice.trim().len();
        if len > 0 {
            entries.push(start + lead..start + lead + len);
        }
    }

    /// Leading spaces and tabs of the line containing `pos`
    pub fn line_indent(&self, pos: usize) -> &'a str {
        let line_start = self.text[..pos].rfind('\n').map_or(0, |p| p + 1);
        let line = &self.text[line_start..];
        let width = line.len() - line.trim_start_matches(|c| c == ' ' || c == '\t').len();
        &line[..width]
    }
}

/// Exclusive end of the string literal opened by `quote` at `start`
///
/// Single and double quoted strings cannot span lines; an unterminated one
/// ends at the newline.
fn literal_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut j = start + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == quote => return j + 1,
            b'\n' if quote != b'`' => return j,
            _ => j += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_and_comments_are_not_code() {
        let text = r#"a "b{" 'c}' `d{e}` // f{
/* g} */ h"#;
        let scanner = Scanner::new(text);

        assert!(scanner.is_code(0));
        assert!(!scanner.is_code(text.find("b{").unwrap()));
        assert!(!scanner.is_code(text.find("c}").unwrap()));
        assert!(!scanner.is_code(text.find("e}").unwrap()));
        assert!(!scanner.is_code(text.find("f{").unwrap()));
        assert!(!scanner.is_code(text.find("g}").unwrap()));
        assert!(scanner.is_code(text.find('h').unwrap()));
    }

    #[test]
    fn test_escaped_quote_stays_in_literal() {
        let text = r#"x = "a\"}" }"#;
        let scanner = Scanner::new(text);
        assert!(!scanner.is_code(text.find("}\"").unwrap()));
        assert!(scanner.is_code(text.rfind('}').unwrap()));
    }

    #[test]
    fn test_unterminated_string_ends_at_newline() {
        let text = "x = 'oops\ny = { }";
        let scanner = Scanner::new(text);
        assert!(scanner.is_code(text.find('y').unwrap()));
    }

    #[test]
    fn test_closing_brace_arbitrary_depth() {
        let text = "{ a: { b: { c: { d: 1 } } }, e: \"}\" } tail";
        let scanner = Scanner::new(text);
        assert_eq!(scanner.closing_brace(0), Some(text.rfind('}').unwrap()));
        assert_eq!(scanner.closing_brace(1), None);
    }

    #[test]
    fn test_closing_brace_unbalanced() {
        let scanner = Scanner::new("{ a: { b: 1 }");
        assert_eq!(scanner.closing_brace(0), None);
    }

    #[test]
    fn test_key_at() {
        let text = "  openai : { apiKey: x }, std::io";
        let scanner = Scanner::new(text);

        let key = scanner.key_at(2).unwrap();
        assert_eq!(&text[key.name], "openai");
        assert_eq!(key.value, text.find('{').unwrap());

        // middle of a word
        assert!(scanner.key_at(3).is_none());
        // path separator
        assert!(scanner.key_at(text.find("std").unwrap()).is_none());
    }

    #[test]
    fn test_enclosing_brace() {
        let text = "{ a: { b: 1 }, c: '{', d: 2 }";
        let scanner = Scanner::new(text);
        assert_eq!(scanner.enclosing_brace(text.find("d:").unwrap()), Some(0));
        assert_eq!(scanner.enclosing_brace(text.find("b:").unwrap()), Some(5));
        assert_eq!(scanner.enclosing_brace(0), None);
    }

    #[test]
    fn test_key_before() {
        let text = "default : { x }, std::{ y }";
        let scanner = Scanner::new(text);
        let key = scanner.key_before(text.find('{').unwrap()).unwrap();
        assert_eq!(&text[key], "default");
        assert!(scanner.key_before(text.rfind('{').unwrap()).is_none());
        assert!(scanner.key_before(0).is_none());
    }

    #[test]
    fn test_unicode_key() {
        let text = "ñx: { apiKey: k }";
        let scanner = Scanner::new(text);
        let key = scanner.key_at(0).unwrap();
        assert_eq!(&text[key.name], "ñx");
        // the tail of a word is not a key of its own
        assert!(scanner.key_at("ñ".len()).is_none());
    }

    #[test]
    fn test_word_boundaries() {
        let text = "xproviders: {} providers: {}";
        let scanner = Scanner::new(text);
        assert!(!scanner.word_at(1, "providers"));
        assert!(scanner.word_at(text.rfind("providers").unwrap(), "providers"));
    }

    #[test]
    fn test_split_entries() {
        let text = "{ a: { x: 1, y: 2 }, b: f(1, 2), c: [3, 4], d: 'e,f', }";
        let scanner = Scanner::new(text);
        let entries: Vec<&str> = scanner
            .split_entries(1, text.len() - 1)
            .into_iter()
            .map(|r| &text[r])
            .collect();

        assert_eq!(entries, vec!["a: { x: 1, y: 2 }", "b: f(1, 2)", "c: [3, 4]", "d: 'e,f'"]);
    }

    #[test]
    fn test_trivia() {
        let text = "a /* c */ \n  b";
        let scanner = Scanner::new(text);
        assert_eq!(scanner.skip_trivia(1), text.find('b').unwrap());
        assert_eq!(scanner.trim_trivia_end(0, text.len() - 1), 1);
        assert_eq!(scanner.preceding_code_byte(text.len() - 1), Some(b'a'));
        assert_eq!(scanner.preceding_code_byte(0), None);
    }

    #[test]
    fn test_line_indent() {
        let text = "root\n\t  inner: { }\n";
        let scanner = Scanner::new(text);
        assert_eq!(scanner.line_indent(2), "");
        assert_eq!(scanner.line_indent(text.find("inner").unwrap()), "\t  ");
        assert_eq!(scanner.line_indent(text.find('{').unwrap()), "\t  ");
    }
}
