//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use rigup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Resolving plan");
//! ui.success("Provisioning complete");
//!
//! assert!(ui.messages().contains(&"Resolving plan".to_string()));
//! assert!(ui.successes().contains(&"Provisioning complete".to_string()));
//! ```

use std::time::Duration;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    steps_started: Vec<(usize, usize, String)>,
    steps_completed: Vec<(String, Duration)>,
    steps_failed: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured step starts as (index, total, label).
    pub fn steps_started(&self) -> &[(usize, usize, String)] {
        &self.steps_started
    }

    /// Get all captured step completions.
    pub fn steps_completed(&self) -> &[(String, Duration)] {
        &self.steps_completed
    }

    /// Get all captured step failures.
    pub fn steps_failed(&self) -> &[String] {
        &self.steps_failed
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn step_started(&mut self, index: usize, total: usize, label: &str) {
        self.steps_started.push((index, total, label.to_string()));
    }

    fn step_completed(&mut self, label: &str, duration: Duration) {
        self.steps_completed.push((label.to_string(), duration));
    }

    fn step_failed(&mut self, label: &str) {
        self.steps_failed.push(label.to_string());
    }
}
