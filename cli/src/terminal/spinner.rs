use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

/// Shown on stderr while probes are in flight. Hidden when stderr is not a terminal.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(msg: String) -> Self {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&[
                "▁▁▁▁▁",
                "▁▂▂▂▁",
                "▁▄▂▄▁",
                "▂▄▆▄▂",
                "▄▆█▆▄",
                "▂▄▆▄▂",
                "▁▄▂▄▁",
                "▁▂▂▂▁",
            ]);

        pb.set_style(style);
        pb.set_message(msg);
        pb.enable_steady_tick(TICK);

        Self { pb }
    }

    pub fn is_finished(&self) -> bool {
        self.pb.is_finished()
    }

    pub fn clear(&self) {
        if !self.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
