//! Color values and their resolution to RGB.
//!
//! Callers describe colors in several shapes:
//!
//! - Named 4-bit colors and abbreviations: `"red"`, `"r"`, `"MAGENTA"`
//! - RGB triples: `(255, 107, 53)`
//! - Hex strings: `"#ff6b35"` (any length split into three equal groups)
//! - `""` or `"default"`: no color
//!
//! [`classify`] sorts a [`ColorValue`] into a [`ColorKind`], and [`resolve`]
//! turns it into the RGB triple that actually goes on the wire. Only named
//! colors need a capability check; everything malformed degrades to no color.
//!
//! ```rust
//! use xprint::style::{resolve, ColorKind, ColorValue, Rgb};
//!
//! let (rgb, kind) = resolve(&ColorValue::from("#ff0000"), || false).unwrap();
//! assert_eq!(rgb, Some(Rgb(255, 0, 0)));
//! assert_eq!(kind, ColorKind::Rgb);
//!
//! // Named colors fail without 24-bit support instead of downgrading
//! assert!(resolve(&ColorValue::from("red"), || false).is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::colors;
use crate::error::{ColorError, Result, XprintError};
use crate::style::capability::terminal_name;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// The `R;G;B` parameter triple used in SGR sequences.
    pub fn params(&self) -> String {
        format!("{};{};{}", self.0, self.1, self.2)
    }
}

/// A color as supplied by a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawColor", into = "RawColor")]
pub enum ColorValue {
    /// No color.
    #[default]
    Default,
    /// A 4-bit color name, abbreviation or code.
    Named(String),
    /// A validated RGB triple.
    Rgb(u8, u8, u8),
    /// A `#`-prefixed hex string.
    Hex(String),
    /// An unvalidated numeric sequence, e.g. read from a config file.
    Components(Vec<i64>),
}

/// Classification of a [`ColorValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Invalid,
    Default,
    FourBit,
    Rgb,
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case("default") {
            ColorValue::Default
        } else if s.starts_with('#') {
            ColorValue::Hex(s.to_string())
        } else {
            ColorValue::Named(s.to_string())
        }
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColorValue::Rgb(r, g, b)
    }
}

impl From<Rgb> for ColorValue {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        ColorValue::Rgb(r, g, b)
    }
}

impl From<Vec<i64>> for ColorValue {
    fn from(components: Vec<i64>) -> Self {
        match rgb_from_components(&components) {
            Ok(Rgb(r, g, b)) => ColorValue::Rgb(r, g, b),
            Err(_) => ColorValue::Components(components),
        }
    }
}

impl ColorValue {
    /// Shorthand for [`classify`].
    pub fn kind(&self) -> ColorKind {
        classify(self)
    }

    /// The RGB triple for values of kind [`ColorKind::Rgb`]; `None` otherwise.
    ///
    /// Named colors are not looked up here; see [`resolve`].
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            ColorValue::Rgb(r, g, b) => Some(Rgb(*r, *g, *b)),
            ColorValue::Components(c) => rgb_from_components(c).ok(),
            ColorValue::Hex(s) => decode_hex(s).ok(),
            ColorValue::Named(s) if s.starts_with('#') => decode_hex(s).ok(),
            _ => None,
        }
    }
}

/// Sorts a color value into its [`ColorKind`].
///
/// Unknown color names still classify as [`ColorKind::FourBit`]; they only
/// degrade to no color once looked up.
pub fn classify(value: &ColorValue) -> ColorKind {
    match value {
        ColorValue::Default => ColorKind::Default,
        ColorValue::Rgb(..) => ColorKind::Rgb,
        ColorValue::Components(c) => match rgb_from_components(c) {
            Ok(_) => ColorKind::Rgb,
            Err(_) => ColorKind::Invalid,
        },
        ColorValue::Hex(s) => match decode_hex(s) {
            Ok(_) => ColorKind::Rgb,
            Err(_) => ColorKind::Invalid,
        },
        ColorValue::Named(s) => classify_str(s),
    }
}

fn classify_str(s: &str) -> ColorKind {
    if s.is_empty() || s.eq_ignore_ascii_case("default") {
        ColorKind::Default
    } else if s.starts_with('#') {
        match decode_hex(s) {
            Ok(_) => ColorKind::Rgb,
            Err(_) => ColorKind::Invalid,
        }
    } else {
        ColorKind::FourBit
    }
}

/// Decodes `#` followed by hex digits split into three equal groups.
///
/// Group values are taken as-is, so `#fff` is `(15, 15, 15)`.
pub fn decode_hex(s: &str) -> std::result::Result<Rgb, ColorError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.is_empty() || hex.len() % 3 != 0 {
        return Err(ColorError::HexLength(s.to_string()));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::HexDigits(s.to_string()));
    }

    let group = hex.len() / 3;
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let digits = &hex[i * group..(i + 1) * group];
        *channel = u32::from_str_radix(digits, 16)
            .ok()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| ColorError::HexDigits(s.to_string()))?;
    }
    Ok(Rgb(channels[0], channels[1], channels[2]))
}

fn rgb_from_components(components: &[i64]) -> std::result::Result<Rgb, ColorError> {
    let bad = || ColorError::Components(components.to_vec());
    match components {
        [r, g, b] => Ok(Rgb(
            u8::try_from(*r).map_err(|_| bad())?,
            u8::try_from(*g).map_err(|_| bad())?,
            u8::try_from(*b).map_err(|_| bad())?,
        )),
        _ => Err(bad()),
    }
}

/// Canonical RGB triple of a 4-bit color name, abbreviation or code.
pub fn named_rgb(name: &str) -> Option<Rgb> {
    match colors().lookup(name).name.as_str() {
        "BLACK" => Some(Rgb(0, 0, 0)),
        "RED" => Some(Rgb(255, 0, 0)),
        "GREEN" => Some(Rgb(0, 255, 0)),
        "YELLOW" => Some(Rgb(255, 255, 0)),
        "BLUE" => Some(Rgb(0, 0, 255)),
        "MAGENTA" => Some(Rgb(255, 0, 255)),
        "CYAN" => Some(Rgb(0, 255, 255)),
        "WHITE" => Some(Rgb(255, 255, 255)),
        _ => None,
    }
}

/// Resolves a color to the RGB triple to emit, or `None` for no color.
///
/// `probe` is only consulted for named colors. When it reports no 24-bit
/// support the call fails with [`XprintError::Capability`].
pub fn resolve<F>(value: &ColorValue, probe: F) -> Result<(Option<Rgb>, ColorKind)>
where
    F: FnOnce() -> bool,
{
    let kind = classify(value);
    let rgb = match (kind, value) {
        (ColorKind::Default, _) => None,
        (ColorKind::Invalid, _) => {
            debug!(?value, "ignoring malformed color");
            None
        }
        (ColorKind::FourBit, ColorValue::Named(name)) => {
            if !probe() {
                return Err(XprintError::Capability {
                    term: terminal_name(),
                });
            }
            let rgb = named_rgb(name);
            if rgb.is_none() {
                debug!(name = name.as_str(), "unknown color name, using default");
            }
            rgb
        }
        (ColorKind::FourBit, _) => None,
        (ColorKind::Rgb, _) => value.rgb(),
    };
    Ok((rgb, kind))
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Components(Vec<i64>),
    Text(String),
    Unset(()),
}

impl From<RawColor> for ColorValue {
    fn from(raw: RawColor) -> Self {
        match raw {
            RawColor::Components(c) => ColorValue::from(c),
            RawColor::Text(s) => ColorValue::from(s),
            RawColor::Unset(()) => ColorValue::Default,
        }
    }
}

impl From<ColorValue> for RawColor {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Default => RawColor::Unset(()),
            ColorValue::Named(s) | ColorValue::Hex(s) => RawColor::Text(s),
            ColorValue::Rgb(r, g, b) => RawColor::Components(vec![r.into(), g.into(), b.into()]),
            ColorValue::Components(c) => RawColor::Components(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Classification
    // =========================================================================

    #[test]
    fn test_classify_default() {
        assert_eq!(classify(&ColorValue::Default), ColorKind::Default);
        assert_eq!(classify(&ColorValue::Named(String::new())), ColorKind::Default);
        assert_eq!(classify(&ColorValue::Named("default".into())), ColorKind::Default);
        assert_eq!(ColorValue::from("DEFAULT"), ColorValue::Default);
    }

    #[test]
    fn test_classify_rgb_triple() {
        assert_eq!(classify(&ColorValue::Rgb(0, 128, 255)), ColorKind::Rgb);
        assert_eq!(classify(&ColorValue::Components(vec![0, 0, 255])), ColorKind::Rgb);
    }

    #[test]
    fn test_classify_out_of_range_components() {
        assert_eq!(
            classify(&ColorValue::Components(vec![256, 0, 0])),
            ColorKind::Invalid
        );
        assert_eq!(
            classify(&ColorValue::Components(vec![-1, 0, 0])),
            ColorKind::Invalid
        );
    }

    #[test]
    fn test_classify_wrong_shape() {
        assert_eq!(classify(&ColorValue::Components(vec![1, 2])), ColorKind::Invalid);
        assert_eq!(
            classify(&ColorValue::Components(vec![1, 2, 3, 4])),
            ColorKind::Invalid
        );
    }

    #[test]
    fn test_classify_named_even_if_unknown() {
        assert_eq!(classify(&ColorValue::from("red")), ColorKind::FourBit);
        assert_eq!(classify(&ColorValue::from("chartreuse")), ColorKind::FourBit);
    }

    #[test]
    fn test_classify_hex() {
        assert_eq!(classify(&ColorValue::from("#ff6b35")), ColorKind::Rgb);
        assert_eq!(classify(&ColorValue::from("#ff6b3")), ColorKind::Invalid);
        assert_eq!(classify(&ColorValue::from("#gggggg")), ColorKind::Invalid);
        assert_eq!(classify(&ColorValue::from("#")), ColorKind::Invalid);
    }

    #[test]
    fn test_from_components_validates() {
        assert_eq!(ColorValue::from(vec![1, 2, 3]), ColorValue::Rgb(1, 2, 3));
        assert_eq!(
            ColorValue::from(vec![1, 2, 300]),
            ColorValue::Components(vec![1, 2, 300])
        );
    }

    // =========================================================================
    // Hex decoding
    // =========================================================================

    #[test]
    fn test_decode_hex_six_digits() {
        assert_eq!(decode_hex("#ff6b35"), Ok(Rgb(255, 107, 53)));
        assert_eq!(decode_hex("#FF6B35"), Ok(Rgb(255, 107, 53)));
    }

    #[test]
    fn test_decode_hex_short_groups_are_literal() {
        assert_eq!(decode_hex("#fff"), Ok(Rgb(15, 15, 15)));
    }

    #[test]
    fn test_decode_hex_wide_groups_must_fit_a_byte() {
        assert_eq!(decode_hex("#0ff0000ff"), Ok(Rgb(255, 0, 255)));
        assert!(matches!(
            decode_hex("#fff000000"),
            Err(ColorError::HexDigits(_))
        ));
    }

    #[test]
    fn test_decode_hex_rejects_signs() {
        assert!(decode_hex("#+f0000").is_err());
    }

    #[test]
    fn test_decode_hex_bad_length() {
        assert!(matches!(decode_hex("#ffff"), Err(ColorError::HexLength(_))));
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    #[test]
    fn test_resolve_named_with_support() {
        let (rgb, kind) = resolve(&ColorValue::from("magenta"), || true).unwrap();
        assert_eq!(rgb, Some(Rgb(255, 0, 255)));
        assert_eq!(kind, ColorKind::FourBit);
    }

    #[test]
    fn test_resolve_named_abbreviation_and_code() {
        assert_eq!(
            resolve(&ColorValue::from("r"), || true).unwrap().0,
            Some(Rgb(255, 0, 0))
        );
        assert_eq!(
            resolve(&ColorValue::from("6"), || true).unwrap().0,
            Some(Rgb(0, 255, 255))
        );
    }

    #[test]
    fn test_resolve_named_without_support_fails() {
        let err = resolve(&ColorValue::from("red"), || false).unwrap_err();
        assert!(matches!(err, XprintError::Capability { .. }));
    }

    #[test]
    fn test_resolve_hex_without_hash_is_rgb() {
        let value = ColorValue::Hex("ff0000".into());
        assert_eq!(value.kind(), ColorKind::Rgb);
        let (rgb, kind) = resolve(&value, || false).unwrap();
        assert_eq!(rgb, Some(Rgb(255, 0, 0)));
        assert_eq!(kind, ColorKind::Rgb);

        let (rgb, kind) = resolve(&ColorValue::Hex("zz".into()), || false).unwrap();
        assert_eq!(rgb, None);
        assert_eq!(kind, ColorKind::Invalid);
    }

    #[test]
    fn test_resolve_unknown_name_degrades() {
        let (rgb, kind) = resolve(&ColorValue::from("chartreuse"), || true).unwrap();
        assert_eq!(rgb, None);
        assert_eq!(kind, ColorKind::FourBit);
    }

    #[test]
    fn test_resolve_rgb_never_probes() {
        let (rgb, _) = resolve(&ColorValue::Rgb(1, 2, 3), || panic!("probed")).unwrap();
        assert_eq!(rgb, Some(Rgb(1, 2, 3)));
    }

    #[test]
    fn test_resolve_invalid_is_default() {
        let (rgb, kind) = resolve(&ColorValue::Components(vec![999]), || true).unwrap();
        assert_eq!(rgb, None);
        assert_eq!(kind, ColorKind::Invalid);
    }

    // =========================================================================
    // Serde
    // =========================================================================

    #[test]
    fn test_deserialize_shapes() {
        let values: Vec<ColorValue> =
            serde_json::from_str(r##"["red", "#00ff00", [1, 2, 3], [1, 2], null, "default"]"##)
                .unwrap();
        assert_eq!(
            values,
            vec![
                ColorValue::Named("red".into()),
                ColorValue::Hex("#00ff00".into()),
                ColorValue::Rgb(1, 2, 3),
                ColorValue::Components(vec![1, 2]),
                ColorValue::Default,
                ColorValue::Default,
            ]
        );
    }

    #[test]
    fn test_serialize_rgb_as_array() {
        let json = serde_json::to_string(&ColorValue::Rgb(9, 8, 7)).unwrap();
        assert_eq!(json, "[9,8,7]");
    }
}
