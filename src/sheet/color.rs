//! Two-color remapping of grayscale canvases
//!
//! Each channel is remapped independently: grey 0 becomes the foreground component
//! and grey 255 the background component, with the direction of the stretch chosen
//! per channel from which component is larger. A background lighter than the
//! foreground in one channel and darker in another is legal and remaps each channel
//! on its own terms.

use ndarray::Array3;
use std::fmt;
use std::str::FromStr;

use crate::io::error::{ChartError, invalid_parameter};
use crate::raster::buffer::Raster;

/// RGB color with components clamped to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    components: [f64; 3],
}

impl Color {
    /// White paper
    pub const WHITE: Self = Self {
        components: [1.0, 1.0, 1.0],
    };
    /// Black ink
    pub const BLACK: Self = Self {
        components: [0.0, 0.0, 0.0],
    };

    /// Color from unit components; values outside `[0, 1]` are clamped
    pub fn new(components: [f64; 3]) -> Self {
        let [r, g, b] = components;
        Self {
            components: [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)],
        }
    }

    /// Color from 8-bit components
    pub fn from_rgb8(components: [u8; 3]) -> Self {
        Self::new(components.map(|c| f64::from(c) / 255.0))
    }

    /// Unit components
    pub const fn components(&self) -> [f64; 3] {
        self.components
    }
}

impl FromStr for Color {
    type Err = ChartError;

    /// Parse three comma-separated components
    ///
    /// Components are read as unit values unless any exceeds 1, in which case all
    /// three are read on the 0 to 255 scale.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let values = text
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|err| invalid_parameter("color", &text, &err))
            })
            .collect::<Result<Vec<f64>, _>>()?;
        let [r, g, b] = <[f64; 3]>::try_from(values).map_err(|values| {
            invalid_parameter(
                "color",
                &text,
                &format!("expected 3 components r,g,b, found {}", values.len()),
            )
        })?;
        if [r, g, b].iter().any(|&c| c > 1.0) {
            Ok(Self::new([r / 255.0, g / 255.0, b / 255.0]))
        } else {
            Ok(Self::new([r, g, b]))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.components;
        write!(f, "{r},{g},{b}")
    }
}

/// Remap one grey level into one channel
///
/// The arithmetic is stretch first, then offset, in `f64`, truncating to `u8`.
pub fn remap_channel(grey: f64, background: f64, foreground: f64) -> u8 {
    let value = if background < foreground {
        255.0 - grey
    } else {
        grey
    };
    let lo = foreground.min(background);
    let hi = foreground.max(background);
    let mut value = value / 255.0;
    value *= hi - lo;
    value += lo;
    value *= 255.0;
    value.clamp(0.0, 255.0) as u8
}

/// Convert a grayscale canvas into an RGB buffer between two colors
pub fn colorize(canvas: &Raster<f64>, background: Color, foreground: Color) -> Array3<u8> {
    let (height, width) = canvas.dims();
    let bg = background.components();
    let fg = foreground.components();
    Array3::from_shape_fn((height, width, 3), |(row, col, channel)| {
        let grey = canvas.get(row, col).unwrap_or(255.0);
        let background = bg.get(channel).copied().unwrap_or(1.0);
        let foreground = fg.get(channel).copied().unwrap_or(0.0);
        remap_channel(grey, background, foreground)
    })
}
