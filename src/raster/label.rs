//! Label bands naming each diagram
//!
//! Text rendering needs a font and is left to a [`Labeler`] implementation. This
//! module owns the geometry: where the band goes and how the grid moves down to make
//! room for it.

use crate::io::configuration::Geometry;
use crate::raster::board::{Diagram, PAPER};
use crate::raster::buffer::Raster;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// A chord name split into normal and superscript runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelText {
    /// Text before the first superscript digit
    pub base: String,
    /// Text from the first superscript digit on, with superscript digits made ASCII
    pub superscript: String,
}

impl LabelText {
    /// Split a display name such as `CM⁷` into `CM` and `7`
    pub fn split(name: &str) -> Self {
        let start = name
            .char_indices()
            .find(|(_, c)| SUPERSCRIPT_DIGITS.contains(c))
            .map_or(name.len(), |(index, _)| index);
        let (base, tail) = name.split_at(start);
        let superscript = tail.chars().map(plain_digit).collect();
        Self {
            base: base.to_string(),
            superscript,
        }
    }

    /// True when the name has no superscript part
    pub fn is_plain(&self) -> bool {
        self.superscript.is_empty()
    }
}

fn plain_digit(c: char) -> char {
    SUPERSCRIPT_DIGITS
        .iter()
        .position(|&digit| digit == c)
        .and_then(|value| char::from_digit(value as u32, 10))
        .unwrap_or(c)
}

/// Renders label text into a band bitmap
pub trait Labeler: Sync {
    /// Draw `text` into a paper-coloured band of `width` by `height` pixels
    ///
    /// Text starts `indent` pixels from the left edge, in line with the first string.
    /// A band of a different size is clipped or padded with paper.
    fn render_band(&self, text: &LabelText, width: usize, height: usize, indent: usize) -> Raster;
}

/// Labeler that reserves the band but draws no text
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLabeler;

impl Labeler for BlankLabeler {
    fn render_band(&self, _text: &LabelText, width: usize, height: usize, _indent: usize) -> Raster {
        Raster::filled(height, width, PAPER)
    }
}

/// Attach a label band to a diagram
///
/// The output is `label_size` rows taller. Rows above `padding.top` stay paper, the
/// band follows, and the diagram continues from its own row `padding.top`. With a
/// zero label size the diagram is returned unchanged.
pub fn attach_label(
    diagram: &Diagram,
    name: &str,
    geometry: &Geometry,
    labeler: &dyn Labeler,
) -> Diagram {
    let label_size = geometry.label_size;
    if label_size == 0 {
        return diagram.clone();
    }

    let (height, width) = diagram.dims();
    let top = geometry.padding.top;
    let indent = geometry.mark_size / 2 + geometry.padding.left;
    let band = labeler.render_band(&LabelText::split(name), width, label_size, indent);

    let mut labelled = Raster::filled(height + label_size, width, PAPER);
    labelled.blit(diagram, label_size as isize, 0);
    labelled.fill_rows(0..top + label_size, PAPER);
    let mut band_area = Raster::filled(label_size, width, PAPER);
    band_area.blit(&band, 0, 0);
    labelled.blit(&band_area, top as isize, 0);
    labelled
}
