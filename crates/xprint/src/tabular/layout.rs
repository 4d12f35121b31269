//! Folding a flat list of cells into aligned rows.

use console::Term;

use crate::error::{Result, XprintError};
use crate::measure::{fit_visible, visible_length};
use crate::tabular::types::{TableSpec, Width, Widths};

impl Widths {
    /// Resolves one width per column for the given (already padded) cells.
    pub(crate) fn resolve(&self, cells: &[&str], cols: usize) -> Vec<Width> {
        (0..cols)
            .map(|col| match self {
                Widths::Uniform(width) => *width,
                Widths::PerColumn(list) => match list.get(col) {
                    Some(width) => *width,
                    None => content_width(cells, cols, col),
                },
                Widths::Auto => content_width(cells, cols, col),
            })
            .collect()
    }
}

/// The widest visible length among the cells of column `col`.
fn content_width(cells: &[&str], cols: usize, col: usize) -> Width {
    let widest = cells
        .iter()
        .skip(col)
        .step_by(cols)
        .map(|cell| visible_length(cell))
        .max()
        .unwrap_or(0);
    Width::fixed(widest)
}

/// Formats `cells` row-major into `spec.cols` columns.
///
/// Returns one formatted string per cell: the row prefix (first column
/// only), the cell fitted to its column width, then either the separator or,
/// for the last cell of a row, the row suffix and a line break.
///
/// Fails with [`XprintError::Precondition`] if `spec.cols` is zero.
pub fn layout<S: AsRef<str>>(cells: &[S], spec: &TableSpec) -> Result<Vec<String>> {
    if spec.cols == 0 {
        return Err(XprintError::Precondition(
            "cols should be a positive integer".to_string(),
        ));
    }
    let cols = spec.cols;
    let rows = cells.len().div_ceil(cols);

    let mut cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    if spec.pad {
        cells.resize(rows * cols, "");
    }
    let widths = spec.widths.resolve(&cells, cols);

    let last = cells.len().saturating_sub(1);
    let formatted = cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let (row, col) = (idx / cols, idx % cols);
            let mut out = String::new();

            if col == 0 {
                out.push_str(spec.prefix.for_row(row));
            }
            match widths[col] {
                Width::Fixed(width) => out.push_str(&fit_visible(cell, width)),
                Width::Natural => out.push_str(cell),
            }
            if col + 1 == cols || idx == last {
                out.push_str(spec.suffix.for_row(row));
                out.push('\n');
            } else {
                out.push_str(&spec.separator);
            }
            out
        })
        .collect();

    Ok(formatted)
}

/// [`layout`] joined into print-ready text.
///
/// ```rust
/// use xprint::{tablize, TableSpec};
///
/// let spec = TableSpec::builder(2).separator(" | ").build();
/// let table = tablize(&["a", "bbb", "cc", "d"], &spec).unwrap();
/// assert_eq!(table, "a  | bbb\ncc | d  \n");
/// ```
pub fn tablize<S: AsRef<str>>(cells: &[S], spec: &TableSpec) -> Result<String> {
    Ok(layout(cells, spec)?.concat())
}

/// Tablizes `cells` and writes the table to stdout.
pub fn tprint<S: AsRef<str>>(cells: &[S], spec: &TableSpec) -> Result<()> {
    let table = tablize(cells, spec)?;
    Term::stdout().write_str(&table)?;
    Ok(())
}
