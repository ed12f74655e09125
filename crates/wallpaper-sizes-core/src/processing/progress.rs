use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;
use std::time::Instant;

/// Progress tracker for a batch of generation tasks
///
/// Safe to share between worker threads; a hidden tracker only keeps counts.
pub struct ProgressTracker {
    /// Total number of images to generate
    total: usize,
    /// Overall progress bar
    progress: ProgressBar,
    /// Start time of the batch
    start_time: Instant,
}

impl ProgressTracker {
    /// Create a tracker for `total` tasks, drawn on stderr when `visible`
    pub fn new(total: usize, visible: bool) -> Self {
        let progress = ProgressBar::new(total as u64);
        if visible {
            let style = ProgressStyle::default_bar()
                .template("{wide_bar} {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ ");
            progress.set_style(style);
        } else {
            progress.set_draw_target(ProgressDrawTarget::hidden());
        }
        progress.set_message("Generating...");

        Self {
            total,
            progress,
            start_time: Instant::now(),
        }
    }

    /// Record one finished image
    pub fn increment(&self, name: &str) {
        self.progress.inc(1);
        self.progress.set_message(name.to_string());
    }

    /// Number of images recorded so far
    pub fn completed(&self) -> u64 {
        self.progress.position()
    }

    /// Complete the progress tracking
    pub fn finish(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let done = self.progress.position();
        let throughput = if elapsed > 0.0 && done > 0 {
            done as f64 / elapsed
        } else {
            0.0
        };

        self.progress.finish_with_message(format!(
            "Generated {} images | {:.1}s elapsed | {:.1} img/s",
            done, elapsed, throughput
        ));
        info!(
            "Generated {}/{} images in {:.1}s",
            done, self.total, elapsed
        );
    }

    /// Stop drawing after a failure, leaving the bar where it stopped
    pub fn abandon(&self) {
        self.progress.abandon_with_message("Aborted");
    }
}
