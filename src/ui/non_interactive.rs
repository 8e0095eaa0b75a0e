//! Non-interactive UI for CI/headless environments.

use std::time::Duration;

use super::{format_duration, OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain line-oriented output with no spinners or escape codes, so CI logs
/// stay readable. Step lines are flushed as the run progresses; a step that
/// fails is reported before the aborting error.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn step_started(&mut self, index: usize, total: usize, label: &str) {
        if self.mode.shows_steps() {
            println!("[{}/{}] {}", index, total, label);
        }
    }

    fn step_completed(&mut self, label: &str, duration: Duration) {
        if self.mode.shows_steps() {
            println!("✓ {} ({})", label, format_duration(duration));
        }
    }

    fn step_failed(&mut self, label: &str) {
        println!("✗ {}", label);
    }
}
