//! The `key:value|key:value` option mini-language.
//!
//! Option strings are a compact way to describe a [`StyleRequest`]:
//!
//! ```rust
//! use xprint::{parse_options, ColorValue, StyleRequest};
//!
//! let req = parse_options(StyleRequest::new(), "fg:(255,0,0)|bg:#0000ff|sgr:bold");
//! assert_eq!(req.fg, ColorValue::Rgb(255, 0, 0));
//! assert_eq!(req.bg, ColorValue::Hex("#0000ff".into()));
//! assert_eq!(req.sgr, "bold");
//! ```
//!
//! Values in parentheses are read as an `(r,g,b)` triple; anything else is
//! kept as text. Known keys are `fg`, `bg`, `sgr` and `bright`. Unknown keys
//! are carried in [`StyleRequest::extra`].
//!
//! Parsing is lenient: a malformed token is skipped and the rest still apply.
//!
//! # Inline Markers
//!
//! [`parse_inline`] styles every `$[options](text)` marker found in free text
//! and leaves everything else untouched.

use tracing::debug;

use crate::error::{OptionError, Result};
use crate::style::capability::supports_truecolor;
use crate::style::color::ColorValue;
use crate::style::encode::{colorize, colorize_with, StyleRequest};

/// Applies each option in `options` on top of `base`.
pub fn parse_options(base: StyleRequest, options: &str) -> StyleRequest {
    let mut request = base;
    if options.is_empty() {
        return request;
    }
    for token in options.split('|') {
        if let Err(err) = apply_option(&mut request, token) {
            debug!(%err, "skipping option");
        }
    }
    request
}

fn apply_option(request: &mut StyleRequest, token: &str) -> std::result::Result<(), OptionError> {
    let mut parts = token.split(':');
    let (key, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => (key, value),
        _ => return Err(OptionError::NotAPair(token.to_string())),
    };
    if key.is_empty() || value.is_empty() {
        return Err(OptionError::Empty(token.to_string()));
    }

    match key {
        "fg" => request.fg = parse_color(value)?,
        "bg" => request.bg = parse_color(value)?,
        "sgr" => request.sgr = value.to_string(),
        "bright" => request.bright = parse_flag(key, value)?,
        _ => {
            request.extra.insert(key.to_string(), value.to_string());
        }
    }
    Ok(())
}

fn parse_color(value: &str) -> std::result::Result<ColorValue, OptionError> {
    if value.starts_with('(') && value.ends_with(')') {
        parse_tuple(value)
    } else {
        Ok(ColorValue::from(value))
    }
}

/// Parses `(r,g,b)` into a validated RGB color.
fn parse_tuple(value: &str) -> std::result::Result<ColorValue, OptionError> {
    let bad = || OptionError::BadTuple(value.to_string());
    let inner = &value[1..value.len() - 1];
    let components = inner
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| bad())?;

    match ColorValue::from(components) {
        color @ ColorValue::Rgb(..) => Ok(color),
        _ => Err(bad()),
    }
}

fn parse_flag(key: &str, value: &str) -> std::result::Result<bool, OptionError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(OptionError::BadValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Colorizes `text` with the style described by an option string.
pub fn colorize_options(text: &str, options: &str) -> Result<String> {
    colorize(text, &parse_options(StyleRequest::default(), options))
}

/// Styles every `$[options](text)` marker in `text`.
///
/// Text outside markers passes through unchanged. Named colors inside a
/// marker need 24-bit support, exactly as with [`colorize`].
pub fn parse_inline(text: &str) -> Result<String> {
    parse_inline_with(text, supports_truecolor)
}

/// Like [`parse_inline`], with an explicit capability probe.
pub fn parse_inline_with<F>(text: &str, probe: F) -> Result<String>
where
    F: Fn() -> bool,
{
    xprint_markup::render(text, |options, content| {
        let request = parse_options(StyleRequest::default(), options);
        colorize_with(content, &request, &probe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XprintError;

    mod options {
        use super::*;

        fn parse(options: &str) -> StyleRequest {
            parse_options(StyleRequest::default(), options)
        }

        #[test]
        fn full_option_string() {
            let req = parse("fg:(255,0,0)|bg:(0,0,255)|sgr:bold");
            assert_eq!(req.fg, ColorValue::Rgb(255, 0, 0));
            assert_eq!(req.bg, ColorValue::Rgb(0, 0, 255));
            assert_eq!(req.sgr, "bold");
        }

        #[test]
        fn malformed_middle_token_is_skipped() {
            let req = parse("fg:(255,0,0)|fg(0,255,0)|sgr:bold");
            assert_eq!(req.fg, ColorValue::Rgb(255, 0, 0));
            assert_eq!(req.sgr, "bold");
            assert!(req.extra.is_empty());
        }

        #[test]
        fn bad_tuples_are_skipped() {
            assert_eq!(parse("fg:(1,2)").fg, ColorValue::Default);
            assert_eq!(parse("fg:(1,2,256)").fg, ColorValue::Default);
            assert_eq!(parse("fg:(a,b,c)").fg, ColorValue::Default);
            assert_eq!(parse("fg:()").fg, ColorValue::Default);
        }

        #[test]
        fn tuple_whitespace_is_allowed() {
            assert_eq!(parse("fg:( 1, 2 ,3 )").fg, ColorValue::Rgb(1, 2, 3));
        }

        #[test]
        fn named_and_hex_values() {
            let req = parse("fg:red|bg:#00ff00");
            assert_eq!(req.fg, ColorValue::Named("red".into()));
            assert_eq!(req.bg, ColorValue::Hex("#00ff00".into()));
        }

        #[test]
        fn later_tokens_override_base() {
            let base = StyleRequest::new().fg((1, 1, 1)).sgr("italic");
            let req = parse_options(base, "sgr:bold");
            assert_eq!(req.fg, ColorValue::Rgb(1, 1, 1));
            assert_eq!(req.sgr, "bold");
        }

        #[test]
        fn empty_option_string_keeps_base() {
            let base = StyleRequest::new().sgr("faint");
            assert_eq!(parse_options(base.clone(), ""), base);
        }

        #[test]
        fn extra_colons_and_empty_parts_are_skipped() {
            let req = parse("fg:a:b|:x|sgr:|||bg:c");
            assert_eq!(req.fg, ColorValue::Default);
            assert_eq!(req.sgr, "");
            assert_eq!(req.bg, ColorValue::Named("c".into()));
        }

        #[test]
        fn bright_flag() {
            assert!(parse("bright:true").bright);
            assert!(!parse("bright:0").bright);
            assert!(!parse("bright:maybe").bright);
        }

        #[test]
        fn unknown_keys_pass_through() {
            let req = parse("blink:fast|sgr:bold");
            assert_eq!(req.extra.get("blink").map(String::as_str), Some("fast"));
            assert_eq!(req.sgr, "bold");
        }
    }

    mod inline {
        use super::*;

        #[test]
        fn no_markers_is_identity() {
            assert_eq!(parse_inline_with("plain text", || false).unwrap(), "plain text");
        }

        #[test]
        fn marker_is_encoded() {
            assert_eq!(
                parse_inline_with("a $[fg:(0,255,0)|sgr:bold](ok) b", || false).unwrap(),
                "a \x1b[1;38;2;0;255;0mok\x1b[0m b"
            );
        }

        #[test]
        fn adjacent_markers() {
            assert_eq!(
                parse_inline_with("$[sgr:bold](x)$[sgr:italic](y)", || false).unwrap(),
                "\x1b[1mx\x1b[0m\x1b[3my\x1b[0m"
            );
        }

        #[test]
        fn named_color_follows_probe() {
            let err = parse_inline_with("$[fg:red](x)", || false).unwrap_err();
            assert!(matches!(err, XprintError::Capability { .. }));
            assert_eq!(
                parse_inline_with("$[fg:red](x)", || true).unwrap(),
                "\x1b[38;2;255;0;0mx\x1b[0m"
            );
        }
    }
}
