//! Readings view rendering.
//!
//! Displays every reading in the batch, newest first, with the IAQ band and
//! PM2.5 level of each row.

use airwatch_types::{classify_air_quality, classify_particulate};
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::common::{panel, render_if_empty};
use crate::ui::PLACEHOLDER;

/// Render the Readings view as a selectable table.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if render_if_empty(frame, app, area, "Readings") {
        return;
    }
    let Some(ref data) = app.data else {
        return;
    };

    let header = Row::new(vec![
        Cell::from("Captured"),
        Cell::from("Temp °C"),
        Cell::from("Hum %"),
        Cell::from("IAQ"),
        Cell::from("Band"),
        Cell::from("PM2.5"),
        Cell::from("Level"),
        Cell::from("MQ2"),
        Cell::from("MQ135"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = data
        .readings
        .iter()
        .map(|r| {
            let band = classify_air_quality(r.environment.iaq_index);
            let level = classify_particulate(r.pm25);
            let captured = data.zone.timestamp(r);
            Row::new(vec![
                Cell::from(captured.unwrap_or_else(|| PLACEHOLDER.to_string())),
                Cell::from(format!("{:.1}", r.environment.temperature_c)),
                Cell::from(format!("{:.0}", r.environment.humidity_pct)),
                Cell::from(format!("{:.0}", r.environment.iaq_index)),
                Cell::from(band.label()).style(app.theme.tone_style(band.tone())),
                Cell::from(format!("{:.1}", r.pm25)),
                Cell::from(level.label()).style(app.theme.tone_style(level.tone())),
                Cell::from(format!("{:.0}", r.smoke_level)),
                Cell::from(format!("{:.0}", r.air_quality_raw)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(19), // Captured
        Constraint::Fill(1), // Temp
        Constraint::Fill(1), // Humidity
        Constraint::Fill(1), // IAQ
        Constraint::Min(20), // Band
        Constraint::Fill(1), // PM2.5
        Constraint::Min(9),  // Level
        Constraint::Fill(1), // MQ2
        Constraint::Fill(1), // MQ135
    ];

    let selected = app.selected_row.min(data.readings.len().saturating_sub(1));
    let title = format!(
        " Readings [{}/{}] ({}) ",
        selected + 1,
        data.readings.len(),
        data.zone.label()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(app, title))
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
}
