//! Trends view rendering.
//!
//! Line charts over the batch, oldest reading on the left.

use airwatch_types::ChartPoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType},
    Frame,
};

use crate::app::App;
use crate::ui::common::{panel, render_if_empty};
use crate::ui::PLACEHOLDER;

/// One plotted series: legend name, color and value accessor.
pub struct Series {
    pub name: &'static str,
    pub color: Color,
    pub value: fn(&ChartPoint) -> f64,
}

/// Render the Trends view.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if render_if_empty(frame, app, area, "Trends") {
        return;
    }
    let Some(dashboard) = app.data.as_ref().and_then(|d| d.dashboard.as_ref()) else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);

    let climate = [
        Series {
            name: "Temperature (°C)",
            color: app.theme.temperature,
            value: |p| p.temperature_c,
        },
        Series {
            name: "Humidity (%)",
            color: app.theme.humidity,
            value: |p| p.humidity_pct,
        },
    ];
    render_line_chart(
        frame,
        app,
        &dashboard.series,
        &climate,
        " Temperature & Humidity ",
        chunks[0],
    );

    let pollution = [
        Series {
            name: "PM2.5 (µg/m³)",
            color: app.theme.pm25,
            value: |p| p.pm25,
        },
        Series {
            name: "IAQ",
            color: app.theme.iaq,
            value: |p| p.iaq_index,
        },
    ];
    render_line_chart(
        frame,
        app,
        &dashboard.series,
        &pollution,
        " PM2.5 & IAQ ",
        chunks[1],
    );
}

/// Draw `series` over `points` as a line chart sharing one y axis.
pub fn render_line_chart(
    frame: &mut Frame,
    app: &App,
    points: &[ChartPoint],
    series: &[Series],
    title: &str,
    area: Rect,
) {
    let data: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|s| {
            points
                .iter()
                .enumerate()
                .map(|(i, p)| (i as f64, (s.value)(p)))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(&data)
        .map(|(s, data)| {
            Dataset::default()
                .name(s.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color))
                .data(data)
        })
        .collect();

    let x_max = points.len().saturating_sub(1).max(1) as f64;
    let [y_min, y_max] = value_bounds(data.iter().flatten().map(|&(_, y)| y));

    let chart = Chart::new(datasets)
        .block(panel(app, title.to_string()))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([0.0, x_max])
                .labels(time_axis_labels(points)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([y_min, y_max])
                .labels(vec![
                    format!("{:.0}", y_min),
                    format!("{:.0}", (y_min + y_max) / 2.0),
                    format!("{:.0}", y_max),
                ]),
        );

    frame.render_widget(chart, area);
}

/// First, middle and last time labels, or the placeholder for invalid ones.
pub fn time_axis_labels(points: &[ChartPoint]) -> Vec<String> {
    let label = |p: &ChartPoint| p.time_label.as_deref().unwrap_or(PLACEHOLDER).to_string();
    match points {
        [] => Vec::new(),
        [only] => vec![label(only)],
        [first, .., last] => {
            let mut labels = vec![label(first)];
            if points.len() > 2 {
                labels.push(label(&points[points.len() / 2]));
            }
            labels.push(label(last));
            labels
        }
    }
}

/// Padded y-axis bounds over the finite values.
pub fn value_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }

    if min > max {
        return [0.0, 1.0];
    }

    let pad = ((max - min) * 0.1).max(1.0);
    [min - pad, max + pad]
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwatch_types::{derive_chart_series_in, sample_readings};
    use chrono::Utc;

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds([10.0, 20.0].into_iter()), [9.0, 21.0]);
        assert_eq!(value_bounds([5.0, 5.0].into_iter()), [4.0, 6.0]);
        assert_eq!(value_bounds([f64::NAN, 3.0].into_iter()), [2.0, 4.0]);
        assert_eq!(value_bounds(std::iter::empty::<f64>()), [0.0, 1.0]);
    }

    #[test]
    fn test_time_axis_labels() {
        let mut points = derive_chart_series_in(&sample_readings(), &Utc);
        assert_eq!(time_axis_labels(&points), vec!["10:52", "11:12", "11:32"]);

        points[0].time_label = None;
        assert_eq!(time_axis_labels(&points[..2]), vec![PLACEHOLDER, "11:02"]);
        assert!(time_axis_labels(&[]).is_empty());
    }
}
