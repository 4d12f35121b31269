//! Error types for styling, layout and terminal output.
//!
//! [`XprintError`] is the only error returned from public entry points.
//! Malformed colors and bad option tokens never surface here: they degrade to
//! unstyled output instead (see [`ColorError`] and [`OptionError`]).

use thiserror::Error;

/// Errors returned by the public API.
#[derive(Debug, Error)]
pub enum XprintError {
    /// A named color was requested while 24-bit color support is off.
    #[error("named colors need 24-bit color support, which is not enabled (TERM='{term}'); use bit4_colorize instead")]
    Capability {
        /// The value of `TERM` at the time of the request.
        term: String,
    },

    /// A redraw session received more lines than it was opened with.
    #[error("line {index} is out of range for a flush session of {lines} lines")]
    OutOfRange { index: usize, lines: usize },

    /// A layout precondition was violated (e.g. zero columns).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for xprint operations.
pub type Result<T> = std::result::Result<T, XprintError>;

/// Why a color value could not be decoded.
///
/// Logged and swallowed: an undecodable color resolves to no color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("hex color '{0}' must have a non-zero length divisible by 3")]
    HexLength(String),

    #[error("hex color '{0}' has a group that is not a byte")]
    HexDigits(String),

    #[error("color components {0:?} are not an RGB triple in 0..=255")]
    Components(Vec<i64>),
}

/// Why one `key:value` option token was rejected.
///
/// Logged and skipped: the remaining tokens still apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("option '{0}' is not a single key:value pair")]
    NotAPair(String),

    #[error("option '{0}' has an empty key or value")]
    Empty(String),

    #[error("tuple '{0}' is not three comma-separated integers in 0..=255")]
    BadTuple(String),

    #[error("value '{value}' is not valid for '{key}'")]
    BadValue { key: String, value: String },
}
