//! Color helpers for the CLI's own informational output.
//!
//! Only the list/config commands use these; the demonstration sections
//! write their sequences directly so their bytes stay untouched.

/// Raw ANSI codes for callers that compose lines manually.
pub mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const GRAY: &str = "\x1b[37m";
    pub const DARK_GRAY: &str = "\x1b[90m";
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Theme for CLI messages.
#[derive(Debug, Clone)]
pub struct Theme {
    accent: &'static str,
    primary: &'static str,
    secondary: &'static str,
    error: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ansi::GREEN,
            primary: ansi::GRAY,
            secondary: ansi::DARK_GRAY,
            error: ansi::RED,
        }
    }
}

impl Theme {
    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", self.accent, text, ansi::RESET)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", self.primary, text, ansi::RESET)
    }

    /// Format text with the secondary/dimmed color.
    pub fn secondary_text(&self, text: &str) -> String {
        format!("{}{}{}", self.secondary, text, ansi::RESET)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", self.error, text, ansi::RESET)
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
