//! Terminal progress reporting via indicatif.

use indicatif::{ProgressBar, ProgressStyle};

use crate::ports::ProgressReporter;

/// Progress bar advanced once per announced step.
#[derive(Debug, Default)]
pub struct IndicatifReporter {
    bar: Option<ProgressBar>,
}

impl IndicatifReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for IndicatifReporter {
    fn begin(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        self.bar = Some(bar);
    }

    fn announce(&mut self, index: usize, _total: usize, label: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(index as u64);
            bar.set_message(label.to_string());
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = &self.bar {
            bar.set_position(bar.length().unwrap_or(0));
            bar.finish_with_message("Done");
        }
    }
}
