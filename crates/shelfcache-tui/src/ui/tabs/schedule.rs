use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use shelfcache_core::ScheduleEntry;

use super::render_message;
use crate::app::{App, ScheduleDisplay};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match &app.schedule {
        ScheduleDisplay::Loading => {
            render_message(frame, area, "Schedule", "Loading schedule...", styles::muted_style())
        }
        ScheduleDisplay::Error => render_message(
            frame,
            area,
            "Schedule",
            "Unable to load schedule. Please try again later.",
            styles::error_style(),
        ),
        ScheduleDisplay::Empty => {
            render_message(frame, area, "Schedule", "No upcoming shows.", styles::muted_style())
        }
        ScheduleDisplay::Entries(entries) => render_entries(frame, entries, area),
    }
}

fn date_cell(entry: &ScheduleEntry) -> Cell<'static> {
    Cell::from(Line::from(vec![
        Span::styled(format!("{:>2}", entry.day), styles::date_day_style()),
        Span::raw(" "),
        Span::styled(entry.month.clone(), styles::highlight_style()),
        Span::styled(format!(" {}", entry.year), styles::muted_style()),
    ]))
}

fn render_entries(frame: &mut Frame, entries: &[ScheduleEntry], area: Rect) {
    let header_cells = [
        Cell::from("Date"),
        Cell::from("Show"),
        Cell::from("Location"),
        Cell::from("Time"),
    ];
    let header = Row::new(header_cells)
        .style(styles::title_style())
        .height(1);

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                date_cell(entry),
                Cell::from(entry.title.clone()),
                Cell::from(if entry.location.is_empty() { "-".to_string() } else { entry.location.clone() }),
                Cell::from(if entry.time.is_empty() { "-".to_string() } else { entry.time.clone() }),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Length(12),     // Date: "21 APR 2026"
        Constraint::Percentage(40), // Show
        Constraint::Fill(1),        // Location
        Constraint::Length(16),     // Time
    ];

    let title = format!(" Upcoming Shows ({}) ", entries.len());

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .title_style(styles::muted_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(true)),
    );

    frame.render_widget(table, area);
}
