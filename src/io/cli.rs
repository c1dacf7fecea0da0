//! Command-line interface for generating a chord cheat sheet

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_JPEG_QUALITY, DEFAULT_KINDS, DEFAULT_METACOLS,
    DEFAULT_OUTPUT, DEFAULT_TUNING,
};
use crate::io::error::Result;
use crate::io::image::save_sheet;
use crate::io::progress::DiagramProgress;
use crate::raster::label::BlankLabeler;
use crate::sheet::builder::CheatSheet;
use crate::sheet::color::Color;
use crate::theory::chord::{ChordKind, Tuning};
use crate::theory::pitch::PitchClass;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chordsheet")]
#[command(
    author,
    version,
    about = "Generate a cheat sheet of chord diagrams for a fretted instrument"
)]
/// Command-line arguments for the cheat sheet generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Open-string notes, one per string, comma separated
    #[arg(short, long, default_value = DEFAULT_TUNING)]
    pub tuning: Tuning,

    /// Root notes, one row each; all twelve when omitted
    #[arg(short, long)]
    pub roots: Option<String>,

    /// Chord kinds, one column each; an empty entry is the major triad
    #[arg(short, long, default_value = DEFAULT_KINDS, allow_hyphen_values = true)]
    pub kinds: String,

    /// Number of side-by-side blocks of rows
    #[arg(short, long, default_value_t = DEFAULT_METACOLS)]
    pub metacols: usize,

    /// Paper color as r,g,b in 0..1 or 0..255
    #[arg(short, long)]
    pub background: Option<Color>,

    /// Ink color as r,g,b in 0..1 or 0..255
    #[arg(short, long)]
    pub foreground: Option<Color>,

    /// Draw marks with hard edges
    #[arg(long)]
    pub no_antialias: bool,

    /// Fill metacolumns top to bottom instead of reading across
    #[arg(long)]
    pub no_flip: bool,

    /// Output image; `.jpg`/`.jpeg` writes JPEG, anything else goes by extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// JPEG quality from 1 to 100
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more detail; repeat for fingering search traces
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by `--quiet` and `-v`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Parsed row roots
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not a note
    pub fn root_list(&self) -> Result<Vec<PitchClass>> {
        self.roots.as_deref().map_or_else(
            || Ok(PitchClass::all().collect()),
            |roots| roots.split(',').map(str::parse).collect(),
        )
    }

    /// Parsed column kinds
    ///
    /// # Errors
    ///
    /// Returns an error if a suffix is not a known chord kind
    pub fn kind_list(&self) -> Result<Vec<ChordKind>> {
        self.kinds.split(',').map(str::parse).collect()
    }

    /// Sheet settings described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if roots or kinds fail to parse
    pub fn cheat_sheet(&self) -> Result<CheatSheet> {
        let background = self.background.unwrap_or_else(|| Color::new(DEFAULT_BACKGROUND));
        let foreground = self.foreground.unwrap_or_else(|| Color::new(DEFAULT_FOREGROUND));
        Ok(CheatSheet::new()
            .with_tuning(self.tuning.clone())
            .with_roots(self.root_list()?)
            .with_kinds(self.kind_list()?)
            .with_metacols(self.metacols)
            .with_flip(!self.no_flip)
            .with_antialias(!self.no_antialias)
            .with_colors(background, foreground))
    }
}

/// Generates the sheet described by the command line and writes it out
pub struct SheetProcessor {
    cli: Cli,
}

impl SheetProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate, report and save the sheet
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or the sheet cannot be saved
    pub fn process(&self) -> Result<()> {
        let settings = self.cli.cheat_sheet()?;
        let total = settings.total_diagrams();
        let progress = if self.cli.should_show_progress() {
            DiagramProgress::new(total)
        } else {
            DiagramProgress::hidden(total)
        };

        let rendered = settings.render(&BlankLabeler, Some(&progress))?;
        progress.finish();

        rendered.diagnostics.emit();
        if !rendered.unresolved.is_empty() {
            log::warn!(
                "No complete fingering for: {}",
                rendered.unresolved.join(", ")
            );
        }

        save_sheet(&rendered.sheet, &self.cli.output, self.cli.quality)
    }
}
