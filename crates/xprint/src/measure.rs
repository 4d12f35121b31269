//! Visible length of styled strings.
//!
//! All functions here treat SGR escape sequences (`ESC[<params>m`) as
//! zero-length: they are preserved in output but never counted. Length is the
//! number of Unicode scalar values, not bytes.
//!
//! ```rust
//! use xprint::{fit_visible, visible_length};
//!
//! assert_eq!(visible_length("hello"), 5);
//! assert_eq!(visible_length("\x1b[38;2;255;0;0mred\x1b[0m"), 3);
//! assert_eq!(visible_length("日本"), 2);
//!
//! assert_eq!(fit_visible("\x1b[1mabcdef\x1b[0m", 3), "\x1b[1mabc\x1b[0m");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static SGR_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new("\x1b\\[[0-9;]*m").expect("SGR pattern is valid"));

/// Removes all SGR sequences, leaving only the visible text.
pub fn strip_styles(s: &str) -> Cow<'_, str> {
    SGR_SEQUENCE.replace_all(s, "")
}

/// Number of visible characters in `s`.
pub fn visible_length(s: &str) -> usize {
    let mut len = 0;
    let mut last = 0;
    for m in SGR_SEQUENCE.find_iter(s) {
        len += s[last..m.start()].chars().count();
        last = m.end();
    }
    len + s[last..].chars().count()
}

/// Cuts `s` down to at most `width` visible characters.
///
/// Escape sequences are kept even past the cut, so a trailing reset still
/// closes any style opened before it.
pub fn truncate_visible(s: &str, width: usize) -> Cow<'_, str> {
    if visible_length(s) <= width {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut kept = 0;
    let mut last = 0;
    for m in SGR_SEQUENCE.find_iter(s) {
        kept = push_visible(&mut out, &s[last..m.start()], width, kept);
        out.push_str(m.as_str());
        last = m.end();
    }
    push_visible(&mut out, &s[last..], width, kept);
    Cow::Owned(out)
}

fn push_visible(out: &mut String, text: &str, width: usize, kept: usize) -> usize {
    let room = width.saturating_sub(kept);
    let mut taken = 0;
    for c in text.chars().take(room) {
        out.push(c);
        taken += 1;
    }
    kept + taken
}

/// Left-justifies `s` with trailing spaces up to `width` visible characters.
///
/// Longer strings are returned unchanged.
pub fn pad_visible(s: &str, width: usize) -> String {
    let len = visible_length(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(len));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

/// Pads or truncates `s` to exactly `width` visible characters.
pub fn fit_visible(s: &str, width: usize) -> String {
    pad_visible(&truncate_visible(s, width), width)
}
