//! Interactive terminal UI.

use console::Term;
use std::io::Write;
use std::time::Duration;

use super::{
    format_duration, should_use_colors, OutputMode, ProgressSpinner, RigupTheme, UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Shows a spinner per plan command; the spinner resolves into a ✓/✗ line
/// when the command finishes.
pub struct TerminalUI {
    term: Term,
    theme: RigupTheme,
    mode: OutputMode,
    spinner: Option<ProgressSpinner>,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            RigupTheme::new()
        } else {
            RigupTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            spinner: None,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn step_started(&mut self, index: usize, total: usize, label: &str) {
        if !self.mode.shows_steps() {
            return;
        }

        let counter = self.theme.step_number.apply_to(format!("[{}/{}]", index, total));
        if self.mode.shows_command_output() {
            // Spinners would interleave with live command output.
            writeln!(self.term, "{} {}", counter, label).ok();
        } else {
            self.spinner = Some(ProgressSpinner::new(&format!("{} {}", counter, label)));
        }
    }

    fn step_completed(&mut self, label: &str, duration: Duration) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_success(&format!(
                "{} {}",
                label,
                self.theme.dim.apply_to(format_duration(duration))
            ));
        }
    }

    fn step_failed(&mut self, label: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_failure(label);
        }
    }
}
