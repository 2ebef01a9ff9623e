use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for long encode runs
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Visible bar over `total` steps labelled with `description`
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(description.to_string());

        ProgressTracker {
            bar,
        }
    }

    /// Tracker that draws nothing, for runs below the display threshold
    pub fn hidden() -> Self {
        ProgressTracker {
            bar: ProgressBar::hidden(),
        }
    }

    /// Advance the bar by `amount` steps
    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Mark the run complete
    pub fn finish(&self) {
        self.bar.finish_with_message("Completed");
    }
}
