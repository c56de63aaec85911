//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Progress of one input file: display name, outputs written, outputs expected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileProgress {
    /// File name shown next to the bar
    pub name: String,
    /// Outputs written so far
    pub written: usize,
    /// Outputs expected for this file
    pub expected: usize,
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per recent file, plus a batch bar once the file count exceeds
/// the number of individual bars
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<FileProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Create a manager whose bars are never drawn, for tests and quiet runs
    pub fn hidden() -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            ..Self::new()
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new file
    pub fn start_file(&mut self, index: usize, path: &Path, expected: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileProgress::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileProgress {
                name,
                written: 0,
                expected,
            };
        }
        self.update_bars();
    }

    /// Record one more output written for a file
    pub fn output_written(&mut self, index: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.written = (state.written + 1).min(state.expected);
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.written = state.expected;
        }
        self.update_bars();
    }

    /// Current state of a file, if it has been started
    pub fn file_state(&self, index: usize) -> Option<&FileProgress> {
        self.file_states.get(index)
    }

    /// Number of per-file bars in use
    pub fn bar_count(&self) -> usize {
        self.file_bars.len()
    }

    /// Whether the batch bar is shown
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the most recent files in the available bars
    fn update_bars(&self) {
        let active: Vec<&FileProgress> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar, state) in self.file_bars.iter().zip(visible) {
            bar.set_length(state.expected as u64);
            bar.set_position(state.written as u64);
            bar.set_message(format!("{}/{}", state.written, state.expected));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
