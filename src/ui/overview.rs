//! Overview view rendering.
//!
//! Shows the latest reading as four cards (temperature, humidity, IAQ,
//! PM2.5) above the IAQ and PM2.5 gauges.

use airwatch_types::{Dashboard, PM25_GOOD_MAX};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::duration::format_duration;
use crate::ui::common::{panel, render_if_empty};

/// Upper end of the IAQ gauge scale.
pub const IAQ_GAUGE_MAX: f64 = 500.0;

/// Clamp a gauge ratio into `0.0..=1.0`, mapping non-finite values to zero.
fn gauge_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Render the Overview view.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if render_if_empty(frame, app, area, "Overview") {
        return;
    }
    let Some(dashboard) = app.data.as_ref().and_then(|d| d.dashboard.as_ref()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(5), // Cards
        Constraint::Min(6),    // Gauges
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_cards(frame, app, dashboard, chunks[0]);
    render_gauges(frame, app, dashboard, chunks[1]);

    let footer = Paragraph::new(format!(
        "Sensor ID: {} | refreshed every {}",
        dashboard.device_id(),
        format_duration(app.refresh_interval)
    ))
    .alignment(Alignment::Center)
    .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(footer, chunks[2]);
}

fn render_cards(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let env = &dashboard.latest.environment;
    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    let value_style = Style::default().add_modifier(Modifier::BOLD);

    let temperature = card(
        Span::styled(
            format!("{:.1} °C", env.temperature_c),
            value_style.fg(app.theme.temperature),
        ),
        Span::raw("Temperature"),
    );
    frame.render_widget(temperature.block(panel(app, " Temperature ")), cards[0]);

    let humidity = card(
        Span::styled(
            format!("{:.0} %", env.humidity_pct),
            value_style.fg(app.theme.humidity),
        ),
        Span::raw("Relative humidity"),
    );
    frame.render_widget(humidity.block(panel(app, " Humidity ")), cards[1]);

    let band_style = app.theme.tone_style(dashboard.air_quality.tone());
    let iaq = card(
        Span::styled(
            format!("{:.0}", env.iaq_index),
            value_style.fg(app.theme.iaq),
        ),
        Span::styled(dashboard.air_quality.label(), band_style),
    );
    frame.render_widget(iaq.block(panel(app, " IAQ ")), cards[2]);

    let level_style = app.theme.tone_style(dashboard.particulate.tone());
    let pm25 = card(
        Span::styled(
            format!("{:.1} µg/m³", dashboard.latest.pm25),
            value_style.fg(app.theme.pm25),
        ),
        Span::styled(dashboard.particulate.label(), level_style),
    );
    frame.render_widget(pm25.block(panel(app, " PM2.5 ")), cards[3]);
}

fn card<'a>(value: Span<'a>, caption: Span<'a>) -> Paragraph<'a> {
    Paragraph::new(vec![Line::from(value), Line::from(""), Line::from(caption)])
        .alignment(Alignment::Center)
}

fn render_gauges(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(area);

    let iaq = dashboard.gauges.iaq;
    let iaq_title = format!(" Air Quality Index (0-{:.0}) ", IAQ_GAUGE_MAX);
    let iaq_gauge = Gauge::default()
        .block(panel(app, iaq_title))
        .gauge_style(
            app.theme
                .tone_style(dashboard.air_quality.tone())
                .bg(app.theme.gauge_track),
        )
        .ratio(gauge_ratio(iaq / IAQ_GAUGE_MAX))
        .label(format!("{:.0} {}", iaq, dashboard.air_quality.label()));
    frame.render_widget(iaq_gauge, rows[0]);

    let [current, remaining] = dashboard.gauges.particulate;
    let label = if remaining.value > 0.0 {
        format!(
            "{} {:.1} | {:.1} left to {}",
            current.label, current.value, remaining.value, remaining.label
        )
    } else {
        format!(
            "{} {:.1} | above good level ({:.0})",
            current.label, current.value, PM25_GOOD_MAX
        )
    };
    let pm25_gauge = Gauge::default()
        .block(panel(app, " PM2.5 "))
        .gauge_style(
            app.theme
                .tone_style(dashboard.particulate.tone())
                .bg(app.theme.gauge_track),
        )
        .ratio(gauge_ratio(dashboard.gauges.particulate_ratio()))
        .label(label);
    frame.render_widget(pm25_gauge, rows[1]);
}
