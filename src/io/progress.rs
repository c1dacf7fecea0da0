//! Progress display while diagrams are generated

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static DIAGRAM_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Diagrams: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts finished diagrams across worker threads
///
/// Cloning is cheap and every clone drives the same bar.
#[derive(Debug, Clone)]
pub struct DiagramProgress {
    bar: ProgressBar,
}

impl DiagramProgress {
    /// Visible bar expecting `total` diagrams
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(DIAGRAM_STYLE.clone());
        Self { bar }
    }

    /// Bar that tracks counts without drawing anything
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Record one finished diagram and show its name
    pub fn inc(&self, chord: &str) {
        self.bar.set_message(chord.to_string());
        self.bar.inc(1);
    }

    /// Diagrams finished so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Diagrams expected in total
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Close the bar with a summary message
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} diagrams drawn", self.bar.position()));
    }
}
