//! Position mark glyphs drawn from analytic distance fields
//!
//! Glyphs are square grayscale bitmaps with ink at 0 and paper at 255. Coordinates
//! run from 1 to `size` in both directions, so a glyph of size 15 is centred on 8.

use ndarray::{Array2, Zip};

use crate::io::configuration::Geometry;
use crate::io::diagnostics::{Advisory, Diagnostics};
use crate::raster::buffer::Raster;

/// Exponent of the antialiasing falloff for round marks
const ROUND_FALLOFF: i32 = 8;
/// Exponent of the antialiasing falloff for the cross
const CROSS_FALLOFF: i32 = 4;

/// Symbol drawn at a string/fret position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Solid dot for a fretted note
    Filled,
    /// Ring for an open string
    Open,
    /// Cross for a muted string
    Cross,
}

impl MarkKind {
    /// Map the one-letter symbols `f`, `o` and `x`
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'f' => Some(Self::Filled),
            'o' => Some(Self::Open),
            'x' => Some(Self::Cross),
            _ => None,
        }
    }

    /// One-letter symbol of this kind
    pub const fn symbol(self) -> char {
        match self {
            Self::Filled => 'f',
            Self::Open => 'o',
            Self::Cross => 'x',
        }
    }
}

/// A mark to place, either by kind or as a ready bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    /// Rasterize the named kind at placement time
    Named(MarkKind),
    /// Use this bitmap as is
    Prerendered(Raster),
}

impl Glyph {
    /// Turn the glyph into a bitmap
    pub fn resolve(self, marks: &MarkRasterizer, antialias: bool) -> Raster {
        match self {
            Self::Named(kind) => marks.draw(kind, antialias),
            Self::Prerendered(bitmap) => bitmap,
        }
    }
}

impl From<MarkKind> for Glyph {
    fn from(kind: MarkKind) -> Self {
        Self::Named(kind)
    }
}

impl From<Raster> for Glyph {
    fn from(bitmap: Raster) -> Self {
        Self::Prerendered(bitmap)
    }
}

/// Draws mark glyphs at a fixed size and line width
#[derive(Debug, Clone, Copy)]
pub struct MarkRasterizer {
    size: usize,
    line_width: usize,
}

impl MarkRasterizer {
    /// Rasterizer for marks of the given size and stroke width
    pub const fn new(size: usize, line_width: usize) -> Self {
        Self { size, line_width }
    }

    /// Rasterizer matching a board geometry
    pub const fn from_geometry(geometry: &Geometry) -> Self {
        Self::new(geometry.mark_size, geometry.mark_line_width)
    }

    /// Edge length of the glyphs
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Draw one glyph
    pub fn draw(&self, kind: MarkKind, antialias: bool) -> Raster {
        match kind {
            MarkKind::Filled => self.filled(antialias),
            MarkKind::Open => self.open(antialias),
            MarkKind::Cross => self.cross(antialias),
        }
    }

    /// Draw a glyph from its one-letter symbol
    ///
    /// Unknown symbols produce an all-zero bitmap and an [`Advisory::UnknownMark`].
    pub fn draw_symbol(&self, symbol: char, antialias: bool) -> (Raster, Diagnostics) {
        MarkKind::from_symbol(symbol).map_or_else(
            || {
                (
                    Raster::filled(self.size, self.size, 0),
                    Advisory::UnknownMark { symbol }.into(),
                )
            },
            |kind| (self.draw(kind, antialias), Diagnostics::new()),
        )
    }

    fn radius(&self) -> f64 {
        (self.size as f64 + 1.0) / 2.0
    }

    // Euclidean distance of each pixel from the glyph centre
    fn center_distance(&self) -> Raster<f64> {
        let r = self.radius();
        Raster::from_fn(self.size, self.size, |row, col| {
            let dx = (row + 1) as f64 - r;
            let dy = (col + 1) as f64 - r;
            dx.mul_add(dx, dy * dy).sqrt()
        })
    }

    fn filled(&self, antialias: bool) -> Raster {
        let r = self.radius();
        let distance = self.center_distance();
        if antialias {
            distance.map(|d| falloff(d.min(r) / r, ROUND_FALLOFF))
        } else {
            distance.map(|d| if d >= r { 255 } else { 0 })
        }
    }

    fn open(&self, antialias: bool) -> Raster {
        let r = self.radius();
        let line_width = self.line_width as f64;
        let inner = r - line_width;
        let distance = self.center_distance();

        if !antialias {
            return distance.map(|d| if d < inner || d > r { 255 } else { 0 });
        }

        // Everything off the ring is pushed to the rim so only the ring carries ink
        let mut field = distance
            .map(|d| if d > r || d < inner { r } else { d })
            .into_array();

        // Darkest shade moves to the ring's centreline
        let band = field.mapv(|d| d >= inner && d <= r - line_width / 2.0);
        let interior = field.mapv(|d| d < r);
        if let (Some((_, band_max)), Some((_, interior_max))) =
            (masked_range(&field, &band), masked_range(&field, &interior))
        {
            rescale(&mut field, &band, (band_max, interior_max), true);
            let interior = field.mapv(|d| d < r);
            if let Some((_, interior_max)) = masked_range(&field, &interior) {
                rescale(&mut field, &interior, (0.0, interior_max), false);
            }
        }

        Raster::from_array(field).map(|d| falloff(d / r, ROUND_FALLOFF))
    }

    fn cross(&self, antialias: bool) -> Raster {
        let size = self.size;
        let half_width = self.line_width as f64 / 2.0;

        // Distance to the falling diagonal; slopes of exactly 1 make this |x - y| / sqrt(2)
        let down = Raster::from_fn(size, size, |row, col| {
            let offset = (row as f64 - col as f64) / 2.0;
            (2.0 * offset * offset).sqrt()
        });

        // Normalise by the closest distance outside the nominal line
        let norm = down
            .as_array()
            .iter()
            .copied()
            .filter(|&d| d > half_width)
            .min_by(f64::total_cmp);
        let down = match norm {
            Some(norm) => down.map(|d| (d / norm).min(1.0)),
            None => down.map(|_| 0.0),
        };

        let field = Raster::from_fn(size, size, |row, col| {
            let falling = down.get(row, col).unwrap_or(1.0);
            let rising = down.get(size - 1 - row, col).unwrap_or(1.0);
            falling.min(rising)
        });

        if antialias {
            field.map(|d| falloff(d, CROSS_FALLOFF))
        } else {
            field.map(|d| if d >= 1.0 { 255 } else { 0 })
        }
    }
}

// Maps a normalised distance in [0, 1] to a grey level
fn falloff(value: f64, exponent: i32) -> u8 {
    (value.powi(exponent) * 255.0) as u8
}

fn masked_range(values: &Array2<f64>, mask: &Array2<bool>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    Zip::from(values).and(mask).for_each(|&value, &selected| {
        if selected {
            range = Some(range.map_or((value, value), |(lo, hi)| {
                (lo.min(value), hi.max(value))
            }));
        }
    });
    range
}

// Linearly maps the masked values from their own range onto `target`, optionally
// flipping them first. A masked set with no spread maps onto the target's low end.
#[allow(clippy::suboptimal_flops)]
fn rescale(values: &mut Array2<f64>, mask: &Array2<bool>, target: (f64, f64), reverse: bool) {
    let Some((lo, hi)) = masked_range(values, mask) else {
        return;
    };
    let (new_lo, new_hi) = target;
    let span = hi - lo;
    Zip::from(values).and(mask).for_each(|value, &selected| {
        if selected {
            let mut t = if span > 0.0 { (*value - lo) / span } else { 0.0 };
            if reverse {
                t = 1.0 - t;
            }
            *value = t * (new_hi - new_lo) + new_lo;
        }
    });
}
