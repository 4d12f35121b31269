//! SGR escape sequence encoding.
//!
//! Two entry points produce styled text:
//!
//! - [`colorize`] accepts any [`ColorValue`] and always emits 24-bit RGB
//!   escapes. Named colors are translated to RGB, which requires a terminal
//!   with 24-bit support.
//! - [`bit4_colorize`] emits the classic `3x`/`4x` (or bright `9x`/`10x`)
//!   palette codes and works on any terminal.
//!
//! Every sequence is closed with a reset, so the output always has the shape
//! `ESC[<params>m<text>ESC[0m`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::codes::{colors, styles, ESC, RESET};
use crate::error::Result;
use crate::style::capability::supports_truecolor;
use crate::style::color::{resolve, ColorValue, Rgb};

/// Everything needed to style one piece of text.
///
/// Keys read from option strings that the encoder does not understand are
/// kept in `extra` and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRequest {
    pub fg: ColorValue,
    pub bg: ColorValue,
    /// SGR style name or abbreviation (`"bold"`, `"italic"`, ...).
    pub sgr: String,
    /// Only used by the 4-bit encoder.
    pub bright: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl StyleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: impl Into<ColorValue>) -> Self {
        self.fg = color.into();
        self
    }

    pub fn bg(mut self, color: impl Into<ColorValue>) -> Self {
        self.bg = color.into();
        self
    }

    pub fn sgr(mut self, sgr: impl Into<String>) -> Self {
        self.sgr = sgr.into();
        self
    }

    pub fn bright(mut self, bright: bool) -> Self {
        self.bright = bright;
        self
    }
}

/// Wraps `text` in `ESC[{code}m ... ESC[0m`.
pub fn wrap(text: &str, code: &str) -> String {
    format!("{}[{}m{}{}", ESC, code, text, RESET)
}

/// Joins SGR parameter fragments with `;`, skipping empty ones.
fn join_fragments(fragments: &[&str]) -> String {
    fragments
        .iter()
        .filter(|f| !f.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(";")
}

/// Styles `text` with already-resolved RGB colors.
///
/// `None` colors and unknown `sgr` names are left out of the sequence.
pub fn rgb_colorize(text: &str, fg: Option<Rgb>, bg: Option<Rgb>, sgr: &str) -> String {
    let fg_code = fg.map(|c| format!("38;2;{}", c.params())).unwrap_or_default();
    let bg_code = bg.map(|c| format!("48;2;{}", c.params())).unwrap_or_default();
    let sgr_code = styles().code(sgr);

    wrap(text, &join_fragments(&[sgr_code, &fg_code, &bg_code]))
}

/// Styles `text` with the 4-bit palette. Never needs a capability check.
///
/// `fg` and `bg` are color names, abbreviations or codes; unknown names are
/// left out. `bright` switches to the high-intensity codes.
pub fn bit4_colorize(text: &str, fg: &str, bg: &str, sgr: &str, bright: bool) -> String {
    let (fg_prefix, bg_prefix) = if bright { ("9", "10") } else { ("3", "4") };
    let prefixed = |prefix: &str, color: &str| {
        let code = colors().code(color);
        if code.is_empty() {
            String::new()
        } else {
            format!("{}{}", prefix, code)
        }
    };

    let fg_code = prefixed(fg_prefix, fg);
    let bg_code = prefixed(bg_prefix, bg);
    let sgr_code = styles().code(sgr);

    wrap(text, &join_fragments(&[sgr_code, &fg_code, &bg_code]))
}

/// Styles `text` with 24-bit colors, probing the terminal for named colors.
///
/// Fails with [`Capability`](crate::XprintError::Capability) when a named
/// color is requested on a terminal without 24-bit support.
pub fn colorize(text: &str, request: &StyleRequest) -> Result<String> {
    colorize_with(text, request, supports_truecolor)
}

/// Like [`colorize`], with an explicit capability probe.
pub fn colorize_with<F>(text: &str, request: &StyleRequest, probe: F) -> Result<String>
where
    F: Fn() -> bool,
{
    let (fg, _) = resolve(&request.fg, &probe)?;
    let (bg, _) = resolve(&request.bg, &probe)?;
    Ok(rgb_colorize(text, fg, bg, &request.sgr))
}

/// Colorizes `text` and prints it as a line on stdout.
pub fn cprint(text: &str, request: &StyleRequest) -> Result<()> {
    let styled = colorize(text, request)?;
    console::Term::stdout().write_line(&styled)?;
    Ok(())
}
