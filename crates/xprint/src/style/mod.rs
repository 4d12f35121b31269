//! Color resolution and SGR encoding.
//!
//! - [`color`]: caller color values, classification and resolution to RGB
//! - [`capability`]: whether the terminal accepts 24-bit color escapes
//! - [`encode`]: building escape sequences around text

pub mod capability;
pub mod color;
pub mod encode;

pub use capability::{
    detect_color_support, set_color_detector, supports_truecolor, terminal_name, ColorSupport,
    TRUECOLOR_TERMS,
};
pub use color::{classify, decode_hex, named_rgb, resolve, ColorKind, ColorValue, Rgb};
pub use encode::{
    bit4_colorize, colorize, colorize_with, cprint, rgb_colorize, wrap, StyleRequest,
};
