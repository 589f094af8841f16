//! Progress display for a sequence of fills

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks how many fills of a session have been applied
///
/// Hidden when constructed with [`ProgressManager::hidden`], so callers can
/// report unconditionally.
pub struct ProgressManager {
    bar: ProgressBar,
    cells_changed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to the terminal
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(Self::fill_style());
        Self {
            bar,
            cells_changed: 0,
        }
    }

    /// Set the number of fills the session will apply
    pub fn initialize(&mut self, fill_count: usize) {
        self.cells_changed = 0;
        self.bar.set_length(fill_count as u64);
        self.bar.set_position(0);
        self.bar.set_message("0 cells");
    }

    /// Record a completed fill
    pub fn record_fill(&mut self, changed: usize) {
        self.cells_changed += changed;
        self.bar.inc(1);
        self.bar.set_message(format!("{} cells", self.cells_changed));
    }

    /// Total cells recolored so far
    pub const fn cells_changed(&self) -> usize {
        self.cells_changed
    }

    /// Fills recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} cells recolored", self.cells_changed));
    }

    fn fill_style() -> ProgressStyle {
        let template = format!(
            "Fills: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
