//! Terminal color capability detection.
//!
//! Named colors are emitted as 24-bit RGB escapes, which only some terminals
//! understand. [`supports_truecolor`] answers that question for the color
//! resolver. Use [`set_color_detector`] to override detection.
//!
//! ```rust
//! use xprint::{set_color_detector, supports_truecolor, ColorSupport};
//!
//! set_color_detector(|| ColorSupport::TrueColor);
//! assert!(supports_truecolor());
//!
//! set_color_detector(|| ColorSupport::Auto);
//! ```
//!
//! # Auto Detection
//!
//! In [`ColorSupport::Auto`] (the default), the `TERM` environment variable is
//! compared against [`TRUECOLOR_TERMS`].

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// `TERM` values known to accept 24-bit color escapes.
pub const TRUECOLOR_TERMS: [&str; 4] = ["xterm", "xterm-256color", "screen", "screen-256color"];

/// The color capability reported by a detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    /// 24-bit color escapes are understood.
    TrueColor,
    /// Only the basic 4-bit palette is safe.
    Basic,
    /// Decide from the `TERM` environment variable.
    Auto,
}

type ColorDetector = fn() -> ColorSupport;

static COLOR_DETECTOR: Lazy<Mutex<ColorDetector>> =
    Lazy::new(|| Mutex::new(default_color_detector));

/// Overrides the detector used by [`supports_truecolor`].
pub fn set_color_detector(detector: ColorDetector) {
    let mut guard = COLOR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Detects the current color support, never returning `Auto`.
pub fn detect_color_support() -> ColorSupport {
    let detector = *COLOR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    match detector() {
        ColorSupport::Auto => resolve_auto(),
        other => other,
    }
}

/// The capability probe: true if named colors may be sent as RGB escapes.
pub fn supports_truecolor() -> bool {
    detect_color_support() == ColorSupport::TrueColor
}

/// The terminal name used in error messages.
pub fn terminal_name() -> String {
    std::env::var("TERM").unwrap_or_else(|_| "unknown".to_string())
}

fn resolve_auto() -> ColorSupport {
    match std::env::var("TERM") {
        Ok(term) if TRUECOLOR_TERMS.contains(&term.as_str()) => ColorSupport::TrueColor,
        _ => ColorSupport::Basic,
    }
}

fn default_color_detector() -> ColorSupport {
    ColorSupport::Auto
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_auto_detects_allowed_terms() {
        set_color_detector(default_color_detector);
        for term in TRUECOLOR_TERMS {
            std::env::set_var("TERM", term);
            assert!(supports_truecolor(), "{} should be supported", term);
        }
        std::env::remove_var("TERM");
    }

    #[test]
    #[serial]
    fn test_auto_rejects_other_terms() {
        set_color_detector(default_color_detector);
        std::env::set_var("TERM", "vt100");
        assert!(!supports_truecolor());
        assert_eq!(terminal_name(), "vt100");
        std::env::remove_var("TERM");
    }

    #[test]
    #[serial]
    fn test_missing_term_is_basic() {
        set_color_detector(default_color_detector);
        std::env::remove_var("TERM");
        assert_eq!(detect_color_support(), ColorSupport::Basic);
        assert_eq!(terminal_name(), "unknown");
    }

    #[test]
    #[serial]
    fn test_set_color_detector_override() {
        set_color_detector(|| ColorSupport::TrueColor);
        assert!(supports_truecolor());

        set_color_detector(|| ColorSupport::Basic);
        assert!(!supports_truecolor());

        set_color_detector(default_color_detector);
    }

    #[test]
    #[serial]
    fn test_detect_never_returns_auto() {
        set_color_detector(|| ColorSupport::Auto);
        assert_ne!(detect_color_support(), ColorSupport::Auto);
        set_color_detector(default_color_detector);
    }
}
