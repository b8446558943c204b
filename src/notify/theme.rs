//! Console styling for check output.

use console::Style;

/// Styles used by the checker and notifier.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for update-found messages (yellow).
    pub update: Style,
    /// Style for release URLs (yellow underlined).
    pub url: Style,
    /// Style for per-module failure lines (yellow).
    pub failure: Style,
    /// Style for module headings (bold).
    pub heading: Style,
    /// Style for dim/secondary text (skip notes, cached results).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

impl Theme {
    /// The colored theme.
    pub fn new() -> Self {
        Self {
            update: Style::new().yellow(),
            url: Style::new().yellow().underlined(),
            failure: Style::new().yellow(),
            heading: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// A theme without colors (non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            update: Style::new(),
            url: Style::new(),
            failure: Style::new(),
            heading: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format the per-module heading line.
    pub fn format_module(&self, name: &str) -> String {
        format!("-- {}", self.heading.apply_to(name))
    }

    /// Format a per-module failure line.
    pub fn format_failure(&self, message: &str) -> String {
        format!("\t{}", self.failure.apply_to(format!("failed with: {}", message)))
    }

    /// Format a dim secondary line.
    pub fn format_dim(&self, message: &str) -> String {
        format!("\t{}", self.dim.apply_to(message))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
