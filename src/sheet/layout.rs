//! Row grids of diagrams and their metacolumn arrangement
//!
//! Rows are cut into `metacols` vertically stacked blocks which the composer places
//! side by side. Block `b` holds rows `b * rows_per_block .. (b + 1) * rows_per_block`.

use crate::io::error::{Result, invalid_parameter};
use crate::raster::board::Diagram;

/// Pad a row grid into a rectangle whose row count divides into `metacols` blocks
///
/// Empty rows are appended until the row count is a multiple of `metacols`, then
/// every row is filled up to the longest row with clones of `spacer`. Returns the
/// padded (rows, columns).
///
/// # Errors
///
/// Returns an error if `metacols` is zero
pub fn pad_and_get_dims<T: Clone>(
    rows: &mut Vec<Vec<T>>,
    metacols: usize,
    spacer: &T,
) -> Result<(usize, usize)> {
    if metacols == 0 {
        return Err(invalid_parameter(
            "metacols",
            &metacols,
            &"at least one metacolumn is required",
        ));
    }

    let remainder = rows.len() % metacols;
    if remainder > 0 {
        rows.resize_with(rows.len() + metacols - remainder, Vec::new);
    }

    let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(ncols, spacer.clone());
    }

    Ok((rows.len(), ncols))
}

/// Reorder rows so consecutive rows read across metacolumns instead of down them
///
/// Row `k` of the result (for every `k` except the last) is the padded source row
/// `(k * metacols) % (rows - 1)`; the last row keeps its place. This is the exact
/// transposition for grids whose row count is a multiple of `metacols`, which
/// padding guarantees.
///
/// # Errors
///
/// Returns an error if `metacols` is zero
pub fn flip<T: Clone>(mut rows: Vec<Vec<T>>, metacols: usize, spacer: &T) -> Result<Vec<Vec<T>>> {
    pad_and_get_dims(&mut rows, metacols, spacer)?;
    Ok(reorder(rows, metacols))
}

fn reorder<T: Clone>(rows: Vec<Vec<T>>, metacols: usize) -> Vec<Vec<T>> {
    let Some(last) = rows.len().checked_sub(1).filter(|&last| last > 0) else {
        return rows;
    };
    let mut reordered: Vec<Vec<T>> = (0..last)
        .filter_map(|k| rows.get((k * metacols) % last).cloned())
        .collect();
    reordered.extend(rows.last().cloned());
    reordered
}

/// Rectangular grid of diagrams ready for composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetGrid<T = Diagram> {
    rows: Vec<Vec<T>>,
    metacols: usize,
}

impl<T: Clone> SheetGrid<T> {
    /// Pad `rows` into a grid for `metacols` blocks
    ///
    /// # Errors
    ///
    /// Returns an error if `metacols` is zero
    pub fn new(mut rows: Vec<Vec<T>>, metacols: usize, spacer: &T) -> Result<Self> {
        pad_and_get_dims(&mut rows, metacols, spacer)?;
        Ok(Self { rows, metacols })
    }

    /// Same grid with rows reordered by [`flip`]
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            rows: reorder(self.rows, self.metacols),
            metacols: self.metacols,
        }
    }

    /// Padded rows in placement order
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Take the padded rows
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Number of padded rows
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in every row
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of side-by-side blocks
    pub const fn metacols(&self) -> usize {
        self.metacols
    }

    /// Rows stacked in each block
    pub fn rows_per_block(&self) -> usize {
        self.nrows().div_ceil(self.metacols)
    }

    /// True when there is nothing to place
    pub fn is_empty(&self) -> bool {
        self.nrows() == 0 || self.ncols() == 0
    }

    /// Cells with their (row, col) in placement order
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| ((row, col), cell))
        })
    }
}
