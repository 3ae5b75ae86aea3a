//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use airwatch_types::Tone;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::settings::ThemeChoice;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
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
    /// Series colors.
    pub temperature: Color,
    pub humidity: Color,
    pub iaq: Color,
    pub pm25: Color,
    pub smoke: Color,
    pub air_quality: Color,
    /// Unfilled part of gauges.
    pub gauge_track: Color,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
            temperature: Color::LightRed,
            humidity: Color::LightBlue,
            iaq: Color::LightMagenta,
            pm25: Color::Yellow,
            smoke: Color::Yellow,
            air_quality: Color::LightBlue,
            gauge_track: Color::DarkGray,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
            temperature: Color::Red,
            humidity: Color::Blue,
            iaq: Color::Magenta,
            pm25: Color::Indexed(208),
            smoke: Color::Indexed(208),
            air_quality: Color::Blue,
            gauge_track: Color::Gray,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured theme choice.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Get style for a classification tone
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Excellent => Style::default().fg(Color::Green),
            Tone::Good => Style::default().fg(self.highlight),
            Tone::Caution => Style::default().fg(Color::Yellow),
            Tone::Warning => Style::default().fg(Color::Indexed(208)),
            Tone::Danger => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Tone::Severe => Style::default()
                .fg(Color::Indexed(88))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        }
    }
}
