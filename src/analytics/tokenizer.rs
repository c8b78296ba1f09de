//! Tag Blob Tokenizer
//!
//! A tag blob is a list literal of quoted tokens, e.g. `['Covid19', 'lockdown']`.
//! Accepted grammar:
//!
//! ```text
//! blob   := ws '[' ws ( token ws ( ',' ws token ws )* ( ',' ws )? )? ']' ws
//! token  := '\'' chars '\'' | '"' chars '"'     (backslash escapes the next char)
//! ```
//!
//! Anything outside it is malformed and yields an empty tag list.

use super::types::TagList;
use std::iter::Peekable;
use std::str::Chars;

/// Parses a tag blob into normalized tags. Malformed input gives an empty list.
pub fn extract_tags(raw: &str) -> TagList {
    match parse_list_literal(raw) {
        Some(tokens) => tokens.iter().filter_map(|token| normalize_tag(token)).collect(),
        None => Vec::new(),
    }
}

/// Trims and lower-cases a tag; `None` if nothing is left.
pub fn normalize_tag(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn parse_list_literal(raw: &str) -> Option<Vec<String>> {
    let inner = raw.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars().peekable();
    let mut tokens = Vec::new();

    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            None => return Some(tokens),
            Some(quote @ ('\'' | '"')) => tokens.push(read_quoted(&mut chars, quote)?),
            Some(_) => return None,
        }

        skip_whitespace(&mut chars);
        match chars.next() {
            None => return Some(tokens),
            Some(',') => continue,
            Some(_) => return None,
        }
    }
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Option<String> {
    let mut token = String::new();

    while let Some(c) = chars.next() {
        match c {
            '\\' => token.push(chars.next()?),
            c if c == quote => return Some(token),
            c => token.push(c),
        }
    }

    // unterminated
    None
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}
