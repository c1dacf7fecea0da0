//! Bounds-checked 2-D pixel buffers
//!
//! All compositing goes through [`Raster`] so offset arithmetic and clipping live in
//! one place. Sources that overhang the destination are clipped, never wrapped, and
//! the caller learns how much landed through [`Coverage`].

use ndarray::{Array2, ArrayView2, ArrayViewMut2, Zip, s};
use num_traits::AsPrimitive;
use std::ops::Range;

/// Row-major pixel buffer, indexed `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<T = u8> {
    pixels: Array2<T>,
}

/// How much of a composited source landed inside the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every source pixel was written
    Full,
    /// Part of the source fell outside and was dropped
    Clipped,
    /// Nothing overlapped
    Outside,
}

// Destination and source index ranges along one axis
fn clip_axis(dst_len: usize, src_len: usize, offset: isize) -> Option<(Range<usize>, Range<usize>)> {
    let start = offset.max(0);
    let end = offset
        .saturating_add(src_len as isize)
        .min(dst_len as isize);
    if start >= end {
        return None;
    }
    let dst = (start as usize)..(end as usize);
    let src = ((start - offset) as usize)..((end - offset) as usize);
    Some((dst, src))
}

impl<T: Copy> Raster<T> {
    /// Buffer of the given size with every pixel set to `value`
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), value),
        }
    }

    /// Buffer computed pixel by pixel from `(row, col)`
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(row, col)| f(row, col)),
        }
    }

    /// Wrap an existing array
    pub const fn from_array(pixels: Array2<T>) -> Self {
        Self { pixels }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Size as (height, width)
    pub fn dims(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Pixel at `(row, col)`, `None` outside the buffer
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.pixels.get([row, col]).copied()
    }

    /// Borrow the underlying array
    pub const fn as_array(&self) -> &Array2<T> {
        &self.pixels
    }

    /// Take the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.pixels
    }

    /// Set every pixel
    pub fn fill(&mut self, value: T) {
        self.pixels.fill(value);
    }

    /// Set every pixel in a band of rows, clipped to the buffer
    pub fn fill_rows(&mut self, rows: Range<usize>, value: T) {
        let end = rows.end.min(self.height());
        let start = rows.start.min(end);
        self.pixels.slice_mut(s![start..end, ..]).fill(value);
    }

    /// Set every pixel in a band of columns, clipped to the buffer
    pub fn fill_cols(&mut self, cols: Range<usize>, value: T) {
        let end = cols.end.min(self.width());
        let start = cols.start.min(end);
        self.pixels.slice_mut(s![.., start..end]).fill(value);
    }

    /// View of a rectangle, `None` unless it lies fully inside the buffer
    pub fn region(
        &self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Option<ArrayView2<'_, T>> {
        let bottom = top.checked_add(height)?;
        let right = left.checked_add(width)?;
        (bottom <= self.height() && right <= self.width())
            .then(|| self.pixels.slice(s![top..bottom, left..right]))
    }

    /// Mutable view of a rectangle, `None` unless it lies fully inside the buffer
    pub fn region_mut(
        &mut self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Option<ArrayViewMut2<'_, T>> {
        let bottom = top.checked_add(height)?;
        let right = left.checked_add(width)?;
        (bottom <= self.height() && right <= self.width())
            .then(|| self.pixels.slice_mut(s![top..bottom, left..right]))
    }

    /// Owned copy of a rectangle, `None` unless it lies fully inside the buffer
    pub fn crop(&self, top: usize, left: usize, height: usize, width: usize) -> Option<Self> {
        self.region(top, left, height, width).map(|view| Self {
            pixels: view.to_owned(),
        })
    }

    /// Overwrite pixels with `src` placed at `(top, left)`
    pub fn blit(&mut self, src: &Self, top: isize, left: isize) -> Coverage {
        self.combine(src, top, left, |dst, value| *dst = value)
    }

    /// Apply `f` to every pixel into a new buffer
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Raster<U> {
        Raster {
            pixels: self.pixels.mapv(f),
        }
    }

    /// Numeric conversion with `as` semantics, so floats truncate toward zero
    pub fn cast<U>(&self) -> Raster<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(<T as AsPrimitive<U>>::as_)
    }

    fn combine(
        &mut self,
        src: &Self,
        top: isize,
        left: isize,
        mut op: impl FnMut(&mut T, T),
    ) -> Coverage {
        let (src_height, src_width) = src.dims();
        if src_height == 0 || src_width == 0 {
            return Coverage::Full;
        }
        let Some((dst_rows, src_rows)) = clip_axis(self.height(), src_height, top) else {
            return Coverage::Outside;
        };
        let Some((dst_cols, src_cols)) = clip_axis(self.width(), src_width, left) else {
            return Coverage::Outside;
        };
        let clipped = src_rows.len() < src_height || src_cols.len() < src_width;

        let dst_view = self.pixels.slice_mut(s![dst_rows, dst_cols]);
        let src_view = src.pixels.slice(s![src_rows, src_cols]);
        Zip::from(dst_view)
            .and(src_view)
            .for_each(|dst, &value| op(dst, value));

        if clipped {
            Coverage::Clipped
        } else {
            Coverage::Full
        }
    }
}

impl<T: Copy + PartialOrd> Raster<T> {
    /// Keep the darker of destination and `src` at each pixel
    ///
    /// Ink is stored as low values, so this overlays ink without ever lightening
    /// what is already drawn.
    pub fn composite_min(&mut self, src: &Self, top: isize, left: isize) -> Coverage {
        self.combine(src, top, left, |dst, value| {
            if value < *dst {
                *dst = value;
            }
        })
    }
}
