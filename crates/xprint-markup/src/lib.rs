//! Tokenizer for inline `$[options](content)` styling markers.
//!
//! This crate splits free text into literal runs and marked segments. It knows
//! nothing about colors: each marked segment carries its raw option string and
//! content, and [`render`] hands both to a caller-supplied closure.
//!
//! # Example
//!
//! ```rust
//! use xprint_markup::{render, segments, Segment};
//!
//! let input = "plain $[fg:red](hot) text";
//! let parts: Vec<_> = segments(input).collect();
//! assert_eq!(
//!     parts,
//!     vec![
//!         Segment::Text("plain "),
//!         Segment::Marked { options: "fg:red", content: "hot" },
//!         Segment::Text(" text"),
//!     ]
//! );
//!
//! let shouted = render(input, |_opts, content| {
//!     Ok::<_, std::convert::Infallible>(content.to_uppercase())
//! })
//! .unwrap();
//! assert_eq!(shouted, "plain HOT text");
//! ```
//!
//! # Marker Syntax
//!
//! - `$[` opens the option list
//! - options use letters, digits and `| : ( ) , # _ -`
//! - `](` separates options from content
//! - content runs to the first `)`; markers do not nest
//!
//! Anything that does not form a complete marker is passed through as text.

/// A piece of tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text outside any marker.
    Text(&'a str),
    /// A `$[options](content)` marker.
    Marked {
        /// The raw option string between `$[` and `]`.
        options: &'a str,
        /// The text between `(` and the first `)`.
        content: &'a str,
    },
}

/// Returns an iterator over the segments of `input`.
pub fn segments(input: &str) -> Segments<'_> {
    Segments { input, pos: 0 }
}

/// Returns true if `input` contains at least one complete marker.
pub fn has_markers(input: &str) -> bool {
    segments(input).any(|s| matches!(s, Segment::Marked { .. }))
}

/// Rebuilds `input`, replacing each marker with the output of `apply`.
///
/// `apply` receives the marker's option string and content. Literal text is
/// copied unchanged. The first error returned by `apply` aborts rendering.
pub fn render<F, E>(input: &str, mut apply: F) -> Result<String, E>
where
    F: FnMut(&str, &str) -> Result<String, E>,
{
    let mut output = String::with_capacity(input.len());
    for segment in segments(input) {
        match segment {
            Segment::Text(text) => output.push_str(text),
            Segment::Marked { options, content } => output.push_str(&apply(options, content)?),
        }
    }
    Ok(output)
}

/// Iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];
        let mut search = 0;

        while let Some(offset) = remaining[search..].find("$[") {
            let start = search + offset;
            if let Some(marker) = Marker::match_at(&remaining[start..]) {
                if start > 0 {
                    // Emit the literal run first; the marker is picked up next call
                    self.pos += start;
                    return Some(Segment::Text(&remaining[..start]));
                }
                self.pos += marker.len;
                return Some(Segment::Marked {
                    options: marker.options,
                    content: marker.content,
                });
            }
            search = start + 2;
        }

        self.pos = self.input.len();
        Some(Segment::Text(remaining))
    }
}

struct Marker<'a> {
    options: &'a str,
    content: &'a str,
    len: usize,
}

impl<'a> Marker<'a> {
    /// Matches a complete marker at the start of `s`.
    fn match_at(s: &'a str) -> Option<Self> {
        let body = s.strip_prefix("$[")?;
        let options_len = body
            .find(|c: char| !is_option_char(c))
            .unwrap_or(body.len());
        let rest = body[options_len..].strip_prefix("](")?;
        let close = rest.find(')')?;

        Some(Self {
            options: &body[..options_len],
            content: &rest[..close],
            len: 2 + options_len + 2 + close + 1,
        })
    }
}

fn is_option_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '|' | ':' | '(' | ')' | ',' | '#' | '_' | '-')
}
