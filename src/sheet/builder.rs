//! End-to-end generation of single diagrams and complete cheat sheets
//!
//! A cheat sheet has one row per root and one column per chord kind. Diagrams are
//! independent of each other, so rows are generated in parallel and reassembled in
//! their original order before layout.

use rayon::prelude::*;

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_METACOLS, Geometry, SheetGeometry,
};
use crate::io::diagnostics::Diagnostics;
use crate::io::error::Result;
use crate::io::progress::DiagramProgress;
use crate::raster::board::{BoardRasterizer, Diagram};
use crate::raster::label::{BlankLabeler, Labeler, attach_label};
use crate::sheet::color::Color;
use crate::sheet::compose::{Sheet, SheetComposer};
use crate::sheet::layout::SheetGrid;
use crate::theory::chord::{ChordKind, ChordSpec, Tuning};
use crate::theory::fingering::{FingeringResolver, Resolution};
use crate::theory::pitch::PitchClass;

/// Chord kinds of the default sheet, in column order
pub const DEFAULT_SHEET_KINDS: [ChordKind; 6] = [
    ChordKind::Major,
    ChordKind::Seventh,
    ChordKind::MajorSeventh,
    ChordKind::Minor,
    ChordKind::MinorSeventh,
    ChordKind::Sixth,
];

/// One resolved and drawn chord
#[derive(Debug, Clone)]
pub struct ChordDiagram {
    /// The chord that was drawn
    pub chord: ChordSpec,
    /// Fingering search outcome
    pub resolution: Resolution,
    /// Labelled diagram bitmap
    pub diagram: Diagram,
    /// Advisories from both the search and the drawing
    pub diagnostics: Diagnostics,
}

/// A composed sheet with everything noticed along the way
#[derive(Debug, Clone)]
pub struct RenderedSheet {
    /// Final colored sheet
    pub sheet: Sheet,
    /// Advisories from every diagram and from composition
    pub diagnostics: Diagnostics,
    /// Names of chords whose fingering search did not converge
    pub unresolved: Vec<String>,
}

/// Settings for a grid of chord diagrams
#[derive(Debug, Clone)]
pub struct CheatSheet {
    resolver: FingeringResolver,
    geometry: Geometry,
    sheet_geometry: SheetGeometry,
    roots: Vec<PitchClass>,
    kinds: Vec<ChordKind>,
    metacols: usize,
    flip: bool,
    antialias: bool,
    background: Color,
    foreground: Color,
}

impl Default for CheatSheet {
    fn default() -> Self {
        Self {
            resolver: FingeringResolver::new(Tuning::ukulele()),
            geometry: Geometry::default(),
            sheet_geometry: SheetGeometry::default(),
            roots: PitchClass::all().collect(),
            kinds: DEFAULT_SHEET_KINDS.to_vec(),
            metacols: DEFAULT_METACOLS,
            flip: true,
            antialias: true,
            background: Color::new(DEFAULT_BACKGROUND),
            foreground: Color::new(DEFAULT_FOREGROUND),
        }
    }
}

impl CheatSheet {
    /// Sheet with every default: ukulele tuning, twelve roots, six kinds
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve chords on another tuning
    ///
    /// The board is redrawn with one string per tuned string.
    #[must_use]
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.geometry.string_count = tuning.string_count();
        self.resolver = FingeringResolver::new(tuning);
        self
    }

    /// Draw diagrams with another board geometry
    ///
    /// The string count always follows the tuning, whatever `geometry` says.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Geometry {
            string_count: self.tuning().string_count(),
            ..geometry
        };
        self
    }

    /// Compose with other sheet padding and separators
    #[must_use]
    pub const fn with_sheet_geometry(mut self, sheet_geometry: SheetGeometry) -> Self {
        self.sheet_geometry = sheet_geometry;
        self
    }

    /// One row per root, in this order
    #[must_use]
    pub fn with_roots(mut self, roots: Vec<PitchClass>) -> Self {
        self.roots = roots;
        self
    }

    /// One column per kind, in this order
    #[must_use]
    pub fn with_kinds(mut self, kinds: Vec<ChordKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Number of side-by-side blocks on the sheet
    #[must_use]
    pub const fn with_metacols(mut self, metacols: usize) -> Self {
        self.metacols = metacols;
        self
    }

    /// Whether rows read across metacolumns before going down
    #[must_use]
    pub const fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Whether marks are drawn with soft edges
    #[must_use]
    pub const fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Paper and ink colors of the final sheet
    #[must_use]
    pub const fn with_colors(mut self, background: Color, foreground: Color) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    /// Tuning chords are resolved on
    pub const fn tuning(&self) -> &Tuning {
        self.resolver.tuning()
    }

    /// Board geometry of every diagram
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Roots in row order
    pub fn roots(&self) -> &[PitchClass] {
        &self.roots
    }

    /// Kinds in column order
    pub fn kinds(&self) -> &[ChordKind] {
        &self.kinds
    }

    /// Number of diagrams on the sheet, spacers excluded
    pub fn total_diagrams(&self) -> usize {
        self.roots.len() * self.kinds.len()
    }

    /// Resolve, draw and label one chord
    pub fn build_chord(&self, chord: &ChordSpec, labeler: &dyn Labeler) -> ChordDiagram {
        let resolution = self.resolver.resolve(chord);
        let board = BoardRasterizer::new(self.geometry);
        let (bare, drawing) = board.draw_fingering(&resolution.fingering, self.antialias);
        let diagram = attach_label(&bare, chord.name(), &self.geometry, labeler);

        let mut diagnostics = resolution.diagnostics.clone();
        diagnostics.merge(drawing);

        ChordDiagram {
            chord: chord.clone(),
            resolution,
            diagram,
            diagnostics,
        }
    }

    /// Every diagram of the sheet, rows by root and columns by kind
    pub fn diagrams(
        &self,
        labeler: &dyn Labeler,
        progress: Option<&DiagramProgress>,
    ) -> Vec<Vec<ChordDiagram>> {
        self.roots
            .par_iter()
            .map(|&root| {
                self.kinds
                    .iter()
                    .map(|&kind| {
                        let built = self.build_chord(&ChordSpec::from_kind(root, kind), labeler);
                        if let Some(progress) = progress {
                            progress.inc(built.chord.name());
                        }
                        built
                    })
                    .collect()
            })
            .collect()
    }

    /// Generate every diagram and compose the sheet
    ///
    /// # Errors
    ///
    /// Returns an error if there are no roots or kinds, if `metacols` is zero, or if
    /// the geometry yields diagrams that differ in size
    pub fn render(
        &self,
        labeler: &dyn Labeler,
        progress: Option<&DiagramProgress>,
    ) -> Result<RenderedSheet> {
        let mut diagnostics = Diagnostics::new();
        let mut unresolved = Vec::new();
        let mut rows = Vec::with_capacity(self.roots.len());

        for row in self.diagrams(labeler, progress) {
            let mut cells = Vec::with_capacity(row.len());
            for entry in row {
                if !entry.resolution.converged {
                    unresolved.push(entry.chord.name().to_string());
                }
                diagnostics.merge(entry.diagnostics);
                cells.push(entry.diagram);
            }
            rows.push(cells);
        }

        let spacer = BoardRasterizer::new(self.geometry).spacer();
        let mut grid = SheetGrid::new(rows, self.metacols, &spacer)?;
        if self.flip {
            grid = grid.flipped();
        }

        let composer = SheetComposer::new(self.geometry, self.sheet_geometry);
        let (sheet, composition) = composer.build_sheet(&grid, self.background, self.foreground)?;
        diagnostics.merge(composition);

        log::info!(
            "Composed {}x{} sheet from {} diagrams",
            sheet.width(),
            sheet.height(),
            self.total_diagrams()
        );

        Ok(RenderedSheet {
            sheet,
            diagnostics,
            unresolved,
        })
    }
}

/// Resolve and draw one chord with the default ukulele settings
///
/// # Errors
///
/// Returns an error if the root or the kind is not recognised
pub fn build_chord(root: &str, kind: &str, antialias: bool) -> Result<ChordDiagram> {
    let chord = ChordSpec::parse(root, kind)?;
    let settings = CheatSheet::new().with_antialias(antialias);
    Ok(settings.build_chord(&chord, &BlankLabeler))
}
