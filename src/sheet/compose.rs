//! Assembly of a diagram grid into one colored sheet

use image::RgbImage;
use ndarray::Array3;

use crate::io::configuration::{Geometry, SheetGeometry};
use crate::io::diagnostics::{Advisory, Diagnostics};
use crate::io::error::{ChartError, Result};
use crate::raster::board::Diagram;
use crate::raster::buffer::Raster;
use crate::sheet::color::{Color, colorize};
use crate::sheet::layout::SheetGrid;

/// Final RGB sheet, 8 bits per channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pixels: Array3<u8>,
}

impl Sheet {
    /// Sheet height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Sheet width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// RGB value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        Some([
            *self.pixels.get([row, col, 0])?,
            *self.pixels.get([row, col, 1])?,
            *self.pixels.get([row, col, 2])?,
        ])
    }

    /// Raw buffer indexed `(row, col, channel)`
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Convert into an image for encoding
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            image::Rgb(self.get(y as usize, x as usize).unwrap_or([0, 0, 0]))
        })
    }
}

/// Lays out diagram grids on a sheet
#[derive(Debug, Clone, Copy)]
pub struct SheetComposer {
    board: Geometry,
    sheet: SheetGeometry,
}

impl SheetComposer {
    /// Composer for diagrams drawn with `board` geometry
    pub const fn new(board: Geometry, sheet: SheetGeometry) -> Self {
        Self { board, sheet }
    }

    /// Sheet layout parameters
    pub const fn sheet_geometry(&self) -> &SheetGeometry {
        &self.sheet
    }

    /// Output size as (width, height) for a grid of `nrows` by `ncols` diagrams
    pub fn sheet_size(
        &self,
        diagram: (usize, usize),
        nrows: usize,
        ncols: usize,
        metacols: usize,
    ) -> (usize, usize) {
        let (diagram_height, diagram_width) = diagram;
        let padding = self.sheet.padding;
        let rows_per_block = nrows.div_ceil(metacols.max(1));
        let width = padding.horizontal()
            + metacols * ncols * diagram_width
            + metacols.saturating_sub(1) * self.sheet.separator_width;
        let height = padding.vertical() + rows_per_block * diagram_height;
        (width, height)
    }

    /// Compose the grid onto a grayscale canvas, then remap it into two colors
    ///
    /// Metacolumn `b` holds rows `b * rows_per_block ..`; blocks are separated by a
    /// band whose grey level sits between foreground and background.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or its diagrams differ in size
    pub fn build_sheet(
        &self,
        grid: &SheetGrid<Diagram>,
        background: Color,
        foreground: Color,
    ) -> Result<(Sheet, Diagnostics)> {
        let mut diagnostics = Diagnostics::new();
        if self.board.mark_size > self.board.fret_spacing {
            diagnostics.push(Advisory::MarkExceedsFretSpacing {
                mark_size: self.board.mark_size,
                fret_spacing: self.board.fret_spacing,
            });
        }

        let canvas = self.compose_grey(grid)?;
        let pixels = colorize(&canvas, background, foreground);
        Ok((Sheet { pixels }, diagnostics))
    }

    /// Grayscale canvas of the whole sheet before color remapping
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or its diagrams differ in size
    pub fn compose_grey(&self, grid: &SheetGrid<Diagram>) -> Result<Raster<f64>> {
        let first = grid.get(0, 0).ok_or(ChartError::EmptySheet)?;
        let (diagram_height, diagram_width) = first.dims();
        for (position, diagram) in grid.cells() {
            if diagram.dims() != first.dims() {
                return Err(ChartError::DimensionMismatch {
                    expected: first.dims(),
                    found: diagram.dims(),
                    position,
                });
            }
        }

        let metacols = grid.metacols();
        let ncols = grid.ncols();
        let rows_per_block = grid.rows_per_block();
        let (width, height) =
            self.sheet_size(first.dims(), grid.nrows(), ncols, metacols);
        let padding = self.sheet.padding;
        let block_width = ncols * diagram_width;
        let separator = self.sheet.separator_width;

        let mut canvas = Raster::filled(height, width, 255.0);
        for block in 1..metacols {
            let left = padding.left + block * block_width + (block - 1) * separator;
            canvas.fill_cols(left..left + separator, 255.0 * self.sheet.separator_intensity);
        }

        for ((row, col), diagram) in grid.cells() {
            let block = row / rows_per_block;
            let top = padding.top + (row % rows_per_block) * diagram_height;
            let left = padding.left + col * diagram_width + block * (block_width + separator);
            canvas.blit(&diagram.cast::<f64>(), top as isize, left as isize);
        }

        Ok(canvas)
    }
}
