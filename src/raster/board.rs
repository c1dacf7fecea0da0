//! Fretboard grids and mark placement
//!
//! A diagram is the string/fret grid embedded in whitespace, with one mark per
//! string. Open and muted marks sit above the nut; fretted marks are centred in
//! their fret cell.

use crate::io::configuration::Geometry;
use crate::io::diagnostics::{Advisory, Diagnostics};
use crate::raster::buffer::{Coverage, Raster};
use crate::raster::marks::{Glyph, MarkKind, MarkRasterizer};
use crate::theory::fingering::{Fingering, FretStop};

/// Grayscale bitmap of one chord diagram
pub type Diagram = Raster<u8>;

/// Grey level of grid lines and marks
pub const INK: u8 = 0;
/// Grey level of the background
pub const PAPER: u8 = 255;
/// Placement string that renders as a solid ink block instead of a chord
pub const BLANK_SLOT: &str = "empty";

/// What to draw on one string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Cross above the nut
    Muted,
    /// Ring above the nut
    Open,
    /// Dot in the given fret cell, always at least 1
    Fret(u8),
}

impl Placement {
    /// Decode one character of a placement string: `x` or a digit
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Self::Muted),
            '0' => Some(Self::Open),
            _ => symbol
                .to_digit(10)
                .and_then(|digit| u8::try_from(digit).ok())
                .map(Self::Fret),
        }
    }

    /// Placement for a resolved fret stop
    pub const fn from_stop(stop: FretStop) -> Self {
        match stop {
            FretStop::Muted => Self::Muted,
            FretStop::Fret(0) => Self::Open,
            FretStop::Fret(fret) => Self::Fret(fret),
        }
    }

    /// Mark drawn for this placement
    pub const fn mark(self) -> MarkKind {
        match self {
            Self::Muted => MarkKind::Cross,
            Self::Open => MarkKind::Open,
            Self::Fret(_) => MarkKind::Filled,
        }
    }

    /// Fret the mark is drawn at, 0 for marks above the nut
    pub const fn fret(self) -> u8 {
        match self {
            Self::Muted | Self::Open => 0,
            Self::Fret(fret) => fret,
        }
    }
}

/// Draws chord diagrams for one geometry
#[derive(Debug, Clone, Copy)]
pub struct BoardRasterizer {
    geometry: Geometry,
    marks: MarkRasterizer,
}

impl BoardRasterizer {
    /// Rasterizer for the given geometry
    pub const fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            marks: MarkRasterizer::from_geometry(&geometry),
        }
    }

    /// Geometry used for every diagram
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Mark rasterizer sized for this board
    pub const fn marks(&self) -> &MarkRasterizer {
        &self.marks
    }

    /// Empty grid embedded in whitespace, sized `board_size(false)`
    pub fn draw_board(&self) -> Diagram {
        let g = &self.geometry;
        let (grid_width, grid_height) = g.grid_size();
        let mut grid = Raster::filled(grid_height, grid_width, PAPER);

        grid.fill_rows(0..g.top_line_width, INK);
        for fret in 1..g.fret_count {
            let start = g.top_line_width + (fret - 1) * g.fret_line_width + fret * g.fret_spacing;
            grid.fill_rows(start..start + g.fret_line_width, INK);
        }
        grid.fill_rows(grid_height.saturating_sub(g.bottom_line_width)..grid_height, INK);

        for string in 0..g.string_count {
            let start = string * (g.string_line_width + g.string_spacing);
            grid.fill_cols(start..start + g.string_line_width, INK);
        }

        let (width, height) = g.board_size(false);
        let mut board = Raster::filled(height, width, PAPER);
        board.blit(
            &grid,
            (g.padding.top + g.mark_size) as isize,
            (g.padding.left + g.mark_size / 2) as isize,
        );
        board
    }

    /// Paper-only bitmap with the footprint of a labelled diagram
    pub fn spacer(&self) -> Diagram {
        let (width, height) = self.geometry.board_size(true);
        Raster::filled(height, width, PAPER)
    }

    /// Top-left pixel of the mark for a string and fret
    pub fn mark_origin(&self, string: usize, fret: u8) -> (isize, isize) {
        let g = &self.geometry;
        let left = (g.padding.left + string * (g.string_line_width + g.string_spacing)) as isize;
        let top = if fret == 0 {
            g.padding.top as isize
        } else {
            let cell = (usize::from(fret) - 1) * (g.fret_spacing + g.fret_line_width);
            let centring = (g.fret_spacing as isize - g.mark_size as isize).div_euclid(2);
            (g.padding.top + g.mark_size + g.top_line_width + cell) as isize + centring
        };
        (top, left)
    }

    /// Darken the board with a glyph at the position of `string` and `fret`
    ///
    /// Composition keeps the darker pixel, so grid lines under a mark are never
    /// lightened. Parts of the glyph outside the board are dropped.
    pub fn place_mark(
        &self,
        board: &mut Diagram,
        glyph: impl Into<Glyph>,
        string: usize,
        fret: u8,
        antialias: bool,
    ) -> Coverage {
        let bitmap = glyph.into().resolve(&self.marks, antialias);
        self.composite(board, &bitmap, string, fret)
    }

    /// Render a placement string such as `0003` or `x232`
    ///
    /// `BLANK_SLOT` yields a solid ink canvas. A length that differs from the string
    /// count is reported and drawn positionally anyway; characters that are neither
    /// digits nor `x` are reported and skipped.
    pub fn draw_chord(&self, placements: &str, antialias: bool) -> (Diagram, Diagnostics) {
        if placements == BLANK_SLOT {
            let (width, height) = self.geometry.board_size(false);
            return (Raster::filled(height, width, INK), Diagnostics::new());
        }

        let mut diagnostics = Diagnostics::new();
        let mut parsed = Vec::new();
        for (string, symbol) in placements.chars().enumerate() {
            match Placement::from_char(symbol) {
                Some(placement) => parsed.push((string, placement)),
                None => diagnostics.push(Advisory::InvalidPlacement { string, symbol }),
            }
        }
        self.check_length(placements.chars().count(), &mut diagnostics);

        let board = self.render(&parsed, antialias, &mut diagnostics);
        (board, diagnostics)
    }

    /// Render a resolved fingering without going through the text encoding
    ///
    /// Unlike [`Self::draw_chord`] this handles frets above 9.
    pub fn draw_fingering(&self, fingering: &Fingering, antialias: bool) -> (Diagram, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        self.check_length(fingering.len(), &mut diagnostics);

        let parsed: Vec<(usize, Placement)> = fingering
            .stops()
            .iter()
            .map(|&stop| Placement::from_stop(stop))
            .enumerate()
            .collect();
        let board = self.render(&parsed, antialias, &mut diagnostics);
        (board, diagnostics)
    }

    fn check_length(&self, found: usize, diagnostics: &mut Diagnostics) {
        let expected = self.geometry.string_count;
        if found != expected {
            diagnostics.push(Advisory::PlacementLength { expected, found });
        }
    }

    fn render(
        &self,
        placements: &[(usize, Placement)],
        antialias: bool,
        diagnostics: &mut Diagnostics,
    ) -> Diagram {
        let mut board = self.draw_board();
        let filled = self.marks.draw(MarkKind::Filled, antialias);
        let open = self.marks.draw(MarkKind::Open, antialias);
        let cross = self.marks.draw(MarkKind::Cross, antialias);

        for &(string, placement) in placements {
            let glyph = match placement.mark() {
                MarkKind::Filled => &filled,
                MarkKind::Open => &open,
                MarkKind::Cross => &cross,
            };
            let fret = placement.fret();
            if self.composite(&mut board, glyph, string, fret) != Coverage::Full {
                diagnostics.push(Advisory::MarkOutOfBounds { string, fret });
            }
        }
        board
    }

    fn composite(&self, board: &mut Diagram, bitmap: &Raster, string: usize, fret: u8) -> Coverage {
        let (top, left) = self.mark_origin(string, fret);
        board.composite_min(bitmap, top, left)
    }
}
