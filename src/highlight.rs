use inksac::prelude::*;

/// Terminal styling for shell output. Every method is a no-op when disabled.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    enabled: bool,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::plain()
    }
}

impl Highlighter {
    /// Enables styling only if the terminal reports colour support.
    pub fn detect() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            enabled: !matches!(support, ColorSupport::NoColor),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn directory(&self, name: &str) -> String {
        if !self.enabled {
            return name.to_string();
        }

        let style = Style::builder().foreground(Color::Blue).bold().build();
        name.style(style).to_string()
    }

    pub fn prompt(&self, marker: &str) -> String {
        if !self.enabled {
            return marker.to_string();
        }

        let style = Style::builder().foreground(Color::Green).bold().build();
        marker.style(style).to_string()
    }
}
