//! Table layout configuration.
//!
//! A [`TableSpec`] describes how a flat list of cells is folded into rows:
//! the column count, per-column widths, the separator between cells and the
//! optional per-row prefix and suffix.

use serde::{Deserialize, Serialize};

/// Width of one column, in visible characters.
///
/// Signed inputs map non-positive values to [`Width::Natural`], so `-1` or
/// `0` in a width list means "no fixed width".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Width {
    /// Render cells as they are, without padding or truncation.
    Natural,
    /// Pad or truncate every cell to exactly this many characters.
    Fixed(usize),
}

impl Width {
    /// A fixed width; zero is treated as [`Width::Natural`].
    pub fn fixed(width: usize) -> Self {
        if width == 0 {
            Width::Natural
        } else {
            Width::Fixed(width)
        }
    }
}

impl From<i64> for Width {
    fn from(width: i64) -> Self {
        usize::try_from(width).map_or(Width::Natural, Width::fixed)
    }
}

impl From<Width> for i64 {
    fn from(width: Width) -> Self {
        match width {
            Width::Natural => -1,
            Width::Fixed(w) => i64::try_from(w).unwrap_or(i64::MAX),
        }
    }
}

/// How column widths are chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Widths {
    /// Each column is as wide as its widest cell.
    #[default]
    Auto,
    /// The same width for every column.
    Uniform(Width),
    /// Positional widths; columns past the end of the list use `Auto`.
    PerColumn(Vec<Width>),
}

/// A per-row prefix or suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Affix {
    /// The same string on every row.
    Uniform(String),
    /// One string per row; rows past the end of the list get nothing.
    PerRow(Vec<String>),
}

impl Default for Affix {
    fn default() -> Self {
        Affix::PerRow(Vec::new())
    }
}

impl Affix {
    /// The affix for row `row`.
    pub fn for_row(&self, row: usize) -> &str {
        match self {
            Affix::Uniform(s) => s,
            Affix::PerRow(list) => list.get(row).map_or("", String::as_str),
        }
    }
}

impl From<&str> for Affix {
    fn from(s: &str) -> Self {
        Affix::Uniform(s.to_string())
    }
}

impl From<String> for Affix {
    fn from(s: String) -> Self {
        Affix::Uniform(s)
    }
}

impl From<Vec<String>> for Affix {
    fn from(list: Vec<String>) -> Self {
        Affix::PerRow(list)
    }
}

impl From<Vec<&str>> for Affix {
    fn from(list: Vec<&str>) -> Self {
        Affix::PerRow(list.into_iter().map(String::from).collect())
    }
}

/// Layout of a flat cell list into a fixed number of columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSpec {
    /// Number of columns; must be positive when laying out.
    pub cols: usize,
    pub widths: Widths,
    /// Placed between cells of the same row.
    pub separator: String,
    /// Fill the last row with empty cells.
    pub pad: bool,
    pub prefix: Affix,
    pub suffix: Affix,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            cols: 1,
            widths: Widths::Auto,
            separator: "\t".to_string(),
            pad: true,
            prefix: Affix::default(),
            suffix: Affix::default(),
        }
    }
}

impl TableSpec {
    /// A layout with `cols` columns and default settings.
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            ..Self::default()
        }
    }

    pub fn builder(cols: usize) -> TableSpecBuilder {
        TableSpecBuilder {
            spec: Self::new(cols),
        }
    }
}

/// Builder for [`TableSpec`].
#[derive(Clone, Debug)]
pub struct TableSpecBuilder {
    spec: TableSpec,
}

impl TableSpecBuilder {
    /// One width for all columns; non-positive means natural width.
    pub fn width(mut self, width: i64) -> Self {
        self.spec.widths = Widths::Uniform(Width::from(width));
        self
    }

    /// Positional column widths; non-positive entries mean natural width.
    pub fn widths<I: IntoIterator<Item = i64>>(mut self, widths: I) -> Self {
        self.spec.widths = Widths::PerColumn(widths.into_iter().map(Width::from).collect());
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.spec.separator = separator.into();
        self
    }

    pub fn pad(mut self, pad: bool) -> Self {
        self.spec.pad = pad;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<Affix>) -> Self {
        self.spec.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<Affix>) -> Self {
        self.spec.suffix = suffix.into();
        self
    }

    pub fn build(self) -> TableSpec {
        self.spec
    }
}
