//! Output verbosity modes.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including live command output.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output (final status).
    Quiet,
}

impl OutputMode {
    /// Check if this mode streams command output live.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows per-step progress.
    pub fn shows_steps(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_shows_everything() {
        assert!(OutputMode::Verbose.shows_command_output());
        assert!(OutputMode::Verbose.shows_steps());
        assert!(OutputMode::Verbose.shows_status());
    }

    #[test]
    fn normal_hides_command_output() {
        assert!(!OutputMode::Normal.shows_command_output());
        assert!(OutputMode::Normal.shows_steps());
    }

    #[test]
    fn quiet_shows_only_the_outcome() {
        assert!(!OutputMode::Quiet.shows_steps());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
