//! # xprint - Styled Terminal Text
//!
//! `xprint` turns color and style requests into ANSI/SGR escape sequences,
//! measures the visible length of already-styled strings, lays styled cells
//! out in aligned columns and redraws a fixed block of terminal lines in place.
//!
//! ## Core Concepts
//!
//! - [`ColorValue`]: a color as given by the caller (name, RGB, hex, default)
//! - [`StyleRequest`]: foreground, background and SGR style for one string
//! - [`colorize`]: 24-bit encoder; named colors need a capable terminal
//! - [`bit4_colorize`]: classic 4-bit encoder that works everywhere
//! - [`parse_options`] / [`parse_inline`]: the `fg:red|sgr:bold` option
//!   language and inline `$[options](text)` markers
//! - [`visible_length`]: character count ignoring escape codes
//! - [`tablize`]: column layout that measures styled cells correctly
//! - [`Flushing`]: a scoped redraw cycle over N lines
//!
//! ## Quick Start
//!
//! ```rust
//! use xprint::{colorize_with, visible_length, StyleRequest};
//!
//! let request = StyleRequest::new().fg((255, 0, 0)).sgr("bold");
//! let styled = colorize_with("alert", &request, || true).unwrap();
//!
//! assert_eq!(styled, "\x1b[1;38;2;255;0;0malert\x1b[0m");
//! assert_eq!(visible_length(&styled), 5);
//! ```
//!
//! ## Named Colors and Terminal Support
//!
//! Output always uses 24-bit RGB escapes. Named colors are translated to RGB,
//! so [`colorize`] refuses them on terminals whose `TERM` is not known to
//! support it rather than silently downgrading. [`bit4_colorize`] is the
//! fallback:
//!
//! ```rust
//! use xprint::{bit4_colorize, colorize_with, StyleRequest, XprintError};
//!
//! let request = StyleRequest::new().fg("red");
//! let err = colorize_with("x", &request, || false).unwrap_err();
//! assert!(matches!(err, XprintError::Capability { .. }));
//!
//! assert_eq!(bit4_colorize("x", "red", "", "", false), "\x1b[31mx\x1b[0m");
//! ```
//!
//! ## Option Strings
//!
//! ```rust
//! use xprint::parse_inline_with;
//!
//! let out = parse_inline_with("status: $[fg:(0,255,0)](ok)", || false).unwrap();
//! assert_eq!(out, "status: \x1b[38;2;0;255;0mok\x1b[0m");
//! ```
//!
//! ## Redrawing Lines
//!
//! ```rust,no_run
//! use xprint::with_flushing;
//!
//! for tick in 0..100 {
//!     with_flushing(2, |frame| {
//!         frame.write_line(&format!("tick {}", tick))?;
//!         frame.write_line(&format!("{}%", tick))
//!     })?;
//! }
//! # Ok::<(), xprint::XprintError>(())
//! ```

pub mod codes;
mod error;
pub mod flush;
pub mod measure;
mod options;
pub mod style;
pub mod tabular;

pub use codes::{colors, styles, CodeRegistry, NamedCode, ESC, RESET};
pub use error::{ColorError, OptionError, Result, XprintError};
pub use flush::{
    flush_print, flush_print_to, move_up, move_up_to, with_flushing, with_flushing_to, Flushing,
};
pub use measure::{fit_visible, pad_visible, strip_styles, truncate_visible, visible_length};
pub use options::{colorize_options, parse_inline, parse_inline_with, parse_options};
pub use style::{
    bit4_colorize, classify, colorize, colorize_with, cprint, resolve, rgb_colorize,
    set_color_detector, supports_truecolor, ColorKind, ColorSupport, ColorValue, Rgb,
    StyleRequest,
};
pub use tabular::{layout, tablize, tprint, Affix, TableSpec, Width, Widths};
