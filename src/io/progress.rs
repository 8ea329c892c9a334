//! Terminal progress display for a running enumeration

use crate::algorithm::walls::{Progress, Strategy};
use crate::algorithm::worker::WallRequest;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar fed by worker progress events
///
/// Units are levels for the level strategy and top rows for depth-first search.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that tracks state without drawing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Label the bar for a new enumeration
    pub fn start(&self, request: WallRequest, strategy: Strategy) {
        let unit = match strategy {
            Strategy::Levels => "levels",
            Strategy::DepthFirst => "rows",
        };
        self.bar
            .set_prefix(format!("{}x{}", request.width, request.height));
        self.bar.set_message(unit);
        self.bar.set_position(0);
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Report completed units
    pub fn update(&self, progress: Progress) {
        self.bar.set_length(progress.total as u64);
        self.bar.set_position(progress.completed as u64);
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Current bar length
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Replace the bar with a closing summary
    pub fn finish(&self, walls: usize) {
        self.bar.finish_with_message(format!("{walls} walls"));
    }

    /// Remove the bar without a summary
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}
