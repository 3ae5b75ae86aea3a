//! Gas sensor view rendering.
//!
//! Bars for the latest MQ2/MQ135 levels next to their trend over the batch.

use airwatch_types::GaugeSegment;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
    Frame,
};

use crate::app::App;
use crate::ui::common::{panel, render_if_empty};
use crate::ui::trends::{render_line_chart, Series};

/// Bar height for a sensor value; negative and NaN values draw empty.
fn bar_value(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

/// Render the Gas view.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if render_if_empty(frame, app, area, "Gas Sensors") {
        return;
    }
    let Some(dashboard) = app.data.as_ref().and_then(|d| d.dashboard.as_ref()) else {
        return;
    };

    let chunks =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(area);

    let colors = [app.theme.smoke, app.theme.air_quality];
    let bars: Vec<Bar> = dashboard
        .gas
        .iter()
        .zip(colors)
        .map(|(segment, color)| gas_bar(segment, color))
        .collect();

    let bar_width = (chunks[0].width.saturating_sub(4) / 2).clamp(3, 20);
    let chart = BarChart::default()
        .block(panel(app, " Gas Sensors (latest) "))
        .bar_width(bar_width)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, chunks[0]);

    let trend = [
        Series {
            name: "MQ2 (Smoke)",
            color: app.theme.smoke,
            value: |p| p.smoke,
        },
        Series {
            name: "MQ135 (Air Quality)",
            color: app.theme.air_quality,
            value: |p| p.air_quality,
        },
    ];
    render_line_chart(
        frame,
        app,
        &dashboard.series,
        &trend,
        " Gas Sensor Trend ",
        chunks[1],
    );
}

fn gas_bar(segment: &GaugeSegment, color: Color) -> Bar<'static> {
    // Bar labels are short; the legend in the trend chart carries the full name
    let label = segment.label;
    let short = label.split_whitespace().next().unwrap_or(label);
    Bar::default()
        .value(bar_value(segment.value))
        .text_value(format!("{:.0}", segment.value))
        .label(Line::from(short))
        .style(Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_value() {
        assert_eq!(bar_value(120.4), 120);
        assert_eq!(bar_value(44.6), 45);
        assert_eq!(bar_value(-3.0), 0);
        assert_eq!(bar_value(f64::NAN), 0);
    }
}
