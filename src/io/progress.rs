//! Progress display for batch tiling runs

use crate::io::configuration::{MIN_TILINGS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tilings: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tilings of a batch have been written
///
/// Single tilings finish too quickly to be worth a bar, so the bar is only
/// created once the batch reaches [`MIN_TILINGS_FOR_PROGRESS`].
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Prepare the display for `tiling_count` tilings
    pub fn initialize(&mut self, tiling_count: usize) {
        if tiling_count < MIN_TILINGS_FOR_PROGRESS {
            return;
        }

        let bar = ProgressBar::new(tiling_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Whether a bar is currently displayed
    pub const fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Record a finished tiling written to `path`
    pub fn complete_tiling(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.into_owned());
            bar.inc(1);
        }
    }

    /// Record a tiling whose output already existed
    pub fn skip_tiling(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Number of tilings accounted for so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }
}
