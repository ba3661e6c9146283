//! Already-migrated check
//!
//! A coarse textual heuristic: a text counts as migrated when it has both a
//! `default: {` key and a `providers: {` key anywhere (whitespace around the
//! colon is tolerated). It does not check that one is inside the other, so a
//! file mixing nested and flat providers is skipped as a whole.

use super::fragment::NESTED_KEY;
use super::passes::PROVIDERS_KEY;
use super::scan::is_ident_byte;

/// Whether `text` already has the nested provider shape
pub fn is_already_migrated(text: &str) -> bool {
    has_object_key(text, NESTED_KEY) && has_object_key(text, PROVIDERS_KEY)
}

/// `<key> : {` with word boundary before the key
fn has_object_key(text: &str, key: &str) -> bool {
    let bytes = text.as_bytes();
    text.match_indices(key).any(|(at, _)| {
        if at > 0 && is_ident_byte(bytes[at - 1]) {
            return false;
        }
        let rest = text[at + key.len()..].trim_start();
        match rest.strip_prefix(':') {
            Some(value) => value.trim_start().starts_with('{'),
            None => false,
        }
    })
}
