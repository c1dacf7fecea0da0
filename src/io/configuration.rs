//! Geometry constants and the immutable configuration values built from them

// Board geometry, all in pixels
/// Edge length of the square position marks
pub const MARK_SIZE: usize = 15;
/// Line width of the open circle and cross marks
pub const MARK_LINE_WIDTH: usize = 2;
/// Height of the label band above each diagram (0 disables labels)
pub const LABEL_SIZE: usize = 30;
/// Whitespace around each diagram
pub const BOARD_PADDING: Padding = Padding::uniform(20);
/// Number of frets drawn, counting the nut
pub const FRET_COUNT: usize = 7;
/// Width of each fret line
pub const FRET_LINE_WIDTH: usize = 4;
/// Width of the nut at the top of the grid
pub const TOP_LINE_WIDTH: usize = 6;
/// Width of the closing line at the bottom of the grid
pub const BOTTOM_LINE_WIDTH: usize = 0;
/// Gap between consecutive fret lines
pub const FRET_SPACING: usize = 24;
/// Number of strings on the instrument
pub const STRING_COUNT: usize = 4;
/// Width of each string line
pub const STRING_LINE_WIDTH: usize = 2;
/// Gap between consecutive string lines
pub const STRING_SPACING: usize = 22;

// Sheet geometry
/// Whitespace around the whole sheet
pub const SHEET_PADDING: Padding = Padding::uniform(10);
/// Width of the band separating metacolumns
pub const SEPARATOR_WIDTH: usize = 4;
/// Grey level of the separator band, 0 = foreground and 1 = background
pub const SEPARATOR_INTENSITY: f64 = 0.8;

// Repair search
/// Upper bound on finger moves before the fingering search gives up
pub const MAX_REPAIR_ITERATIONS: usize = 10;
/// Largest fret the one-character placement encoding can express
pub const MAX_ENCODED_FRET: u8 = 9;

// Sheet defaults
/// Default number of metacolumns
pub const DEFAULT_METACOLS: usize = 2;
/// Default instrument tuning, low to high as drawn left to right
pub const DEFAULT_TUNING: &str = "G,C,E,A";
/// Default chord kinds, one column each
pub const DEFAULT_KINDS: &str = ",7,M7,m,m7,6";
/// Default paper color
pub const DEFAULT_BACKGROUND: [f64; 3] = [1.0, 1.0, 0.9];
/// Default ink color
pub const DEFAULT_FOREGROUND: [f64; 3] = [0.2, 0.25, 0.3];
/// Default output file
pub const DEFAULT_OUTPUT: &str = "chord-cheat-sheet.jpg";
/// Default JPEG quality
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Whitespace on each side of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Columns on the left
    pub left: usize,
    /// Rows on the top
    pub top: usize,
    /// Rows on the bottom
    pub bottom: usize,
    /// Columns on the right
    pub right: usize,
}

impl Padding {
    /// Same padding on every side
    pub const fn uniform(size: usize) -> Self {
        Self {
            left: size,
            top: size,
            bottom: size,
            right: size,
        }
    }

    /// Combined horizontal padding
    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    /// Combined vertical padding
    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

/// Pixel geometry of a single chord diagram
///
/// Constructed once and passed by value into every rasterizer. Changing any field
/// changes output dimensions deterministically through [`Geometry::board_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Edge length of the square position marks
    pub mark_size: usize,
    /// Line width of open circle and cross marks
    pub mark_line_width: usize,
    /// Height of the label band
    pub label_size: usize,
    /// Whitespace around the grid
    pub padding: Padding,
    /// Number of frets, counting the nut
    pub fret_count: usize,
    /// Width of each fret line
    pub fret_line_width: usize,
    /// Width of the nut
    pub top_line_width: usize,
    /// Width of the closing bottom line
    pub bottom_line_width: usize,
    /// Gap between fret lines
    pub fret_spacing: usize,
    /// Number of strings
    pub string_count: usize,
    /// Width of each string line
    pub string_line_width: usize,
    /// Gap between string lines
    pub string_spacing: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            mark_size: MARK_SIZE,
            mark_line_width: MARK_LINE_WIDTH,
            label_size: LABEL_SIZE,
            padding: BOARD_PADDING,
            fret_count: FRET_COUNT,
            fret_line_width: FRET_LINE_WIDTH,
            top_line_width: TOP_LINE_WIDTH,
            bottom_line_width: BOTTOM_LINE_WIDTH,
            fret_spacing: FRET_SPACING,
            string_count: STRING_COUNT,
            string_line_width: STRING_LINE_WIDTH,
            string_spacing: STRING_SPACING,
        }
    }
}

impl Geometry {
    /// Size of the bare string/fret grid as (width, height)
    pub const fn grid_size(&self) -> (usize, usize) {
        let width = self.string_count * self.string_line_width
            + self.string_count.saturating_sub(1) * self.string_spacing;
        let height = self.top_line_width
            + self.bottom_line_width
            + self.fret_count.saturating_sub(2) * self.fret_line_width
            + self.fret_count.saturating_sub(1) * self.fret_spacing;
        (width, height)
    }

    /// Size of a finished diagram as (width, height)
    ///
    /// Marks overhang the grid by half their size on each side horizontally and sit
    /// fully above the nut when open, so one mark size is reserved in each direction.
    pub const fn board_size(&self, label: bool) -> (usize, usize) {
        let (grid_width, grid_height) = self.grid_size();
        let width = self.mark_size + self.padding.horizontal() + grid_width;
        let mut height = self.mark_size + self.padding.vertical() + grid_height;
        if label {
            height += self.label_size;
        }
        (width, height)
    }
}

/// Layout parameters for the assembled sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Whitespace around the sheet
    pub padding: Padding,
    /// Width of the band between metacolumns
    pub separator_width: usize,
    /// Grey level of the separator, 0 = foreground and 1 = background
    pub separator_intensity: f64,
}

impl Default for SheetGeometry {
    fn default() -> Self {
        Self {
            padding: SHEET_PADDING,
            separator_width: SEPARATOR_WIDTH,
            separator_intensity: SEPARATOR_INTENSITY,
        }
    }
}
