//! Catalog of named SGR styles and 4-bit colors.
//!
//! Each [`NamedCode`] has a canonical upper-case name, a set of lower-case
//! abbreviations and the numeric code it stands for. A [`CodeRegistry`]
//! resolves any of the three back to its entry:
//!
//! ```rust
//! use xprint::codes::{colors, styles};
//!
//! assert_eq!(colors().lookup("RED").code, "1");
//! assert_eq!(colors().lookup("r").code, "1");
//! assert_eq!(colors().lookup("1").name, "RED");
//! assert_eq!(styles().code("bold"), "1");
//!
//! // Unknown keys fall back to the empty DEFAULT entry
//! assert_eq!(colors().code("purple"), "");
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// The escape character that starts every control sequence.
pub const ESC: &str = "\x1b";

/// Resets all styles and colors.
pub const RESET: &str = "\x1b[0m";

/// Name of the fallback entry present in every registry.
pub const DEFAULT_NAME: &str = "DEFAULT";

/// A named numeric escape code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCode {
    /// Canonical name, e.g. `"MAGENTA"`.
    pub name: String,
    /// Lower-case aliases, e.g. `["magenta", "m"]`.
    pub abbrevs: Vec<String>,
    /// Numeric code as emitted on the wire; empty for [`DEFAULT_NAME`].
    pub code: String,
}

impl NamedCode {
    pub fn new(name: &str, abbrevs: &[&str], code: &str) -> Self {
        Self {
            name: name.to_string(),
            abbrevs: abbrevs.iter().map(|a| a.to_string()).collect(),
            code: code.to_string(),
        }
    }

    /// The entry unmatched lookups resolve to.
    pub fn default_entry() -> Self {
        Self::new(DEFAULT_NAME, &["default"], "")
    }

    /// True for the fallback entry, whose empty code means "omit this field".
    pub fn is_default(&self) -> bool {
        self.code.is_empty()
    }
}

/// Lookup table over a fixed set of [`NamedCode`]s.
///
/// Built once and never mutated. Keys are tried as a canonical name, then as
/// a (case-folded) abbreviation, then as a numeric code.
#[derive(Debug, Clone)]
pub struct CodeRegistry {
    entries: Vec<NamedCode>,
    names: HashMap<String, usize>,
    abbrevs: HashMap<String, usize>,
    codes: HashMap<String, usize>,
    default: usize,
}

impl CodeRegistry {
    /// Builds a registry from `entries`; the DEFAULT entry is appended.
    ///
    /// When two entries share a key, the later one wins.
    pub fn new(entries: Vec<NamedCode>) -> Self {
        let mut entries = entries;
        entries.push(NamedCode::default_entry());
        let default = entries.len() - 1;

        let mut names = HashMap::new();
        let mut abbrevs = HashMap::new();
        let mut codes = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            names.insert(entry.name.clone(), index);
            abbrevs.insert(entry.name.to_lowercase(), index);
            for abbrev in &entry.abbrevs {
                abbrevs.insert(abbrev.clone(), index);
            }
            codes.insert(entry.code.clone(), index);
        }

        Self {
            entries,
            names,
            abbrevs,
            codes,
            default,
        }
    }

    /// Resolves `key` to an entry, falling back to DEFAULT.
    pub fn lookup(&self, key: &str) -> &NamedCode {
        let index = self
            .names
            .get(key)
            .or_else(|| self.abbrevs.get(&key.to_lowercase()))
            .or_else(|| self.codes.get(key))
            .copied()
            .unwrap_or(self.default);
        &self.entries[index]
    }

    /// Shorthand for `lookup(key).code`.
    pub fn code(&self, key: &str) -> &str {
        &self.lookup(key).code
    }

    /// Iterates over all entries, DEFAULT last.
    pub fn iter(&self) -> impl Iterator<Item = &NamedCode> {
        self.entries.iter()
    }
}

static STYLES: Lazy<CodeRegistry> = Lazy::new(|| {
    CodeRegistry::new(vec![
        NamedCode::new("NORMAL", &["normal"], "0"),
        NamedCode::new("BOLD", &["bold"], "1"),
        NamedCode::new("FAINT", &["faint"], "2"),
        NamedCode::new("ITALIC", &["italic"], "3"),
        NamedCode::new("UNDERLINE", &["underline"], "4"),
    ])
});

static COLORS: Lazy<CodeRegistry> = Lazy::new(|| {
    CodeRegistry::new(vec![
        NamedCode::new("BLACK", &["black"], "0"),
        NamedCode::new("RED", &["red", "r"], "1"),
        NamedCode::new("GREEN", &["green", "g"], "2"),
        NamedCode::new("YELLOW", &["yellow", "y"], "3"),
        NamedCode::new("BLUE", &["blue"], "4"),
        NamedCode::new("MAGENTA", &["magenta", "m"], "5"),
        NamedCode::new("CYAN", &["cyan", "c"], "6"),
        NamedCode::new("WHITE", &["white", "w"], "7"),
    ])
});

/// SGR text styles: NORMAL, BOLD, FAINT, ITALIC, UNDERLINE.
pub fn styles() -> &'static CodeRegistry {
    &STYLES
}

/// The eight base 4-bit colors.
pub fn colors() -> &'static CodeRegistry {
    &COLORS
}
