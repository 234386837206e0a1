//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use sensorwatch_types::{Severity, Status};

use crate::config::ThemeChoice;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for the safe status.
    pub safe: Color,
    /// Color for the warning status.
    pub warning: Color,
    /// Color for the danger status.
    pub danger: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            safe: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            safe: Color::Green,
            warning: Color::Rgb(176, 120, 0),
            danger: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Safe => self.safe,
            Status::Warning => self.warning,
            Status::Danger => self.danger,
        }
    }

    /// Get style for a sensor status
    pub fn status_style(&self, status: Status) -> Style {
        let style = Style::default().fg(self.status_color(status));
        if status == Status::Danger {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Inverted badge style, e.g. for the status label on a sensor card.
    pub fn badge_style(&self, status: Status) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.status_color(status))
            .add_modifier(Modifier::BOLD)
    }

    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Warning => self.status_style(Status::Warning),
            Severity::Danger => self.status_style(Status::Danger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_choices() {
        assert_eq!(Theme::from_choice(ThemeChoice::Dark).highlight, Color::Cyan);
        assert_eq!(Theme::from_choice(ThemeChoice::Light).highlight, Color::Blue);
    }

    #[test]
    fn test_status_styles() {
        let theme = Theme::dark();
        assert_eq!(theme.status_style(Status::Safe).fg, Some(Color::Green));
        assert_eq!(theme.status_style(Status::Warning).fg, Some(Color::Yellow));

        let danger = theme.status_style(Status::Danger);
        assert_eq!(danger.fg, Some(Color::Red));
        assert!(danger.add_modifier.contains(Modifier::BOLD));

        assert_eq!(theme.severity_style(Severity::Danger), danger);
    }
}
