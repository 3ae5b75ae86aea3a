//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, help overlay
//! and the bordered block every panel uses.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::duration::format_duration;
use crate::ui::PLACEHOLDER;

/// A bordered panel block in the theme's style.
pub fn panel<'a>(app: &App, title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

/// Render a centered message inside a panel.
pub fn render_placeholder(frame: &mut Frame, app: &App, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().add_modifier(Modifier::DIM))
        .block(panel(app, format!(" {} ", title)));
    frame.render_widget(paragraph, area);
}

/// Render the placeholder for a view with no data, returning true if drawn.
pub fn render_if_empty(frame: &mut Frame, app: &App, area: Rect, title: &str) -> bool {
    match &app.data {
        None => {
            render_placeholder(frame, app, area, title, "Loading...");
            true
        }
        Some(data) if data.dashboard.is_none() => {
            render_placeholder(frame, app, area, title, "No readings in batch");
            true
        }
        Some(_) => false,
    }
}

/// Render the header bar with the current air quality status.
///
/// Displays: band indicator, device id, IAQ band, last update time.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let title = Span::styled("AIR QUALITY ", bold);

    let Some(dashboard) = app.data.as_ref().and_then(|d| d.dashboard.as_ref()) else {
        let status = if app.data.is_some() {
            "| No readings"
        } else {
            "| Loading..."
        };
        let line = Line::from(vec![Span::raw(" "), title, Span::raw(status)]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let band_style = app.theme.tone_style(dashboard.air_quality.tone());
    let updated = dashboard.last_updated.as_deref().unwrap_or(PLACEHOLDER);

    let line = Line::from(vec![
        Span::styled(" ● ", band_style),
        title,
        Span::raw("│ "),
        Span::styled(dashboard.device_id().to_string(), bold),
        Span::raw(" │ IAQ "),
        Span::styled(dashboard.air_quality.label(), band_style),
        Span::raw(" │ Last updated "),
        Span::raw(updated),
        Span::styled(
            format!(" ({})", app.zone.label()),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing available views.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" {}:{} ", i + 1, view.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.current_view.index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: sensor id, refresh interval, time since last update, controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.current_view {
        View::Readings => "↑↓:select Tab:switch r:reload e:export ?:help q:quit",
        _ => "Tab:switch r:reload e:export ?:help q:quit",
    };

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | r:retry q:quit", err)
    } else if let Some(ref data) = app.data {
        let sensor = data
            .dashboard
            .as_ref()
            .map(|d| d.device_id().to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        format!(
            " Sensor ID: {} | {} every {} | Updated {:.1}s ago | {}",
            sensor,
            app.source_description(),
            format_duration(app.refresh_interval),
            data.last_updated.elapsed().as_secs_f64(),
            controls,
        )
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Views",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  1-4         Jump to view"),
        Line::from("  Tab/S-Tab   Next/previous view"),
        Line::from("  Esc         Back to overview"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Readings",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Select reading"),
        Line::from("  PgUp/PgDn   Jump 10 rows"),
        Line::from("  Home/End    Newest/oldest"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r           Reload data"),
        Line::from("  e           Export to JSON"),
        Line::from("  ?           Toggle help"),
        Line::from("  q Ctrl+C    Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
