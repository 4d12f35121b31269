//! Column layout for styled text.
//!
//! A flat list of cells is folded row-major into a fixed number of columns.
//! Cell widths are measured with [`visible_length`](crate::visible_length), so
//! escape codes never throw off alignment.
//!
//! ```rust
//! use xprint::tabular::{tablize, TableSpec};
//!
//! let spec = TableSpec::builder(3)
//!     .widths([4, 4, -1])
//!     .separator("|")
//!     .prefix("|")
//!     .suffix("|")
//!     .build();
//!
//! let table = tablize(&["id", "name", "note", "1", "alpha", "first"], &spec).unwrap();
//! assert_eq!(table, "|id  |name|note|\n|1   |alph|first|\n");
//! ```
//!
//! # Column Widths
//!
//! - [`Widths::Auto`] - each column fits its widest cell
//! - [`Widths::Uniform`] - one width for all columns
//! - [`Widths::PerColumn`] - positional widths, the rest auto
//!
//! A [`Width::Natural`] column (any non-positive width) is neither padded nor
//! truncated.

mod layout;
mod types;

pub use layout::{layout, tablize, tprint};
pub use types::{Affix, TableSpec, TableSpecBuilder, Width, Widths};
