use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use shelfcache_core::utils::truncate;
use shelfcache_core::{InventoryItem, InventoryPage, PageButton, PaginationControls};

use super::render_message;
use crate::app::{App, AppState, InventoryContent, PriceBound};
use crate::ui::styles;

/// Cards per row; a full page is a 3x3 grid.
const GRID_COLUMNS: usize = 3;

/// Placeholder shown when an item has no picture.
const NO_IMAGE: &str = "📦";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter bar
            Constraint::Min(6),    // Grid
            Constraint::Length(1), // Pagination
        ])
        .split(area);

    render_filter_bar(frame, app, chunks[0]);

    match &app.inventory.content {
        InventoryContent::Loading => {
            render_message(frame, chunks[1], "Inventory", "Loading inventory...", styles::muted_style())
        }
        InventoryContent::Error => render_message(
            frame,
            chunks[1],
            "Inventory",
            "Unable to load inventory. Please try again later.",
            styles::error_style(),
        ),
        InventoryContent::NoItems => {
            render_message(frame, chunks[1], "Inventory", "No items found.", styles::muted_style())
        }
        InventoryContent::Page(page) => {
            render_grid(frame, page, chunks[1]);
            render_pagination(frame, &page.pagination, chunks[2]);
        }
    }
}

/// An input field, with a cursor when it is being edited.
fn input_spans(label: &str, value: &str, editing: bool, placeholder: &str) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(format!("{}: ", label), styles::muted_style())];
    if editing {
        spans.push(Span::styled(format!("{}▌", value), styles::search_style()));
    } else if value.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), styles::muted_style()));
    } else {
        spans.push(Span::styled(value.to_string(), styles::list_item_style()));
    }
    spans.push(Span::raw("   "));
    spans
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    spans.extend(input_spans(
        "[/] Search",
        &app.search_input,
        app.state == AppState::Searching,
        "-",
    ));
    spans.extend(input_spans("[f] Category", &app.category, false, ""));
    spans.extend(input_spans("[s] Sort", app.sort_by.label(), false, ""));
    spans.extend(input_spans(
        "[[] Min",
        &app.min_price_input,
        app.state == AppState::EditingPrice(PriceBound::Min),
        "any",
    ));
    spans.extend(input_spans(
        "[]] Max",
        &app.max_price_input,
        app.state == AppState::EditingPrice(PriceBound::Max),
        "any",
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(matches!(
            app.state,
            AppState::Searching | AppState::EditingPrice(_)
        )));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_grid(frame: &mut Frame, page: &InventoryPage, area: Rect) {
    let row_count = page.items.len().div_ceil(GRID_COLUMNS).max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);

    for (row_area, chunk) in rows.iter().zip(page.items.chunks(GRID_COLUMNS)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (cell_area, item) in cells.iter().zip(chunk) {
            render_card(frame, item, *cell_area);
        }
    }
}

fn render_card(frame: &mut Frame, item: &InventoryItem, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;

    let mut lines = vec![
        Line::from(Span::styled(truncate(&item.name, width), styles::title_style())),
        Line::from(Span::styled(item.price.clone(), styles::price_style())),
    ];
    if item.has_image() {
        lines.push(Line::from(Span::styled(truncate(&item.image, width), styles::muted_style())));
    } else {
        lines.push(Line::from(NO_IMAGE));
    }

    let block = Block::default()
        .title(format!(" {} ", item.category))
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Pagination bar spans: "‹ Prev  1 … 4 [5] 6 … 12  Next ›".
pub(crate) fn pagination_spans(controls: &PaginationControls) -> Vec<Span<'static>> {
    if !controls.is_visible() {
        return vec![Span::styled(
            format!(" {} items", controls.total_items),
            styles::muted_style(),
        )];
    }

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("‹ Prev", styles::page_button_style(false, controls.prev_enabled)),
        Span::raw("  "),
    ];
    for button in &controls.buttons {
        match button {
            PageButton::Page { number, current } => {
                let label = if *current {
                    format!("[{}]", number)
                } else {
                    format!(" {} ", number)
                };
                spans.push(Span::styled(label, styles::page_button_style(*current, true)));
            }
            PageButton::Ellipsis => spans.push(Span::styled(" … ", styles::muted_style())),
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "Next ›",
        styles::page_button_style(false, controls.next_enabled),
    ));
    spans.push(Span::styled(
        format!("   page {} of {} ({} items)", controls.current_page, controls.total_pages, controls.total_items),
        styles::muted_style(),
    ));
    spans
}

fn render_pagination(frame: &mut Frame, controls: &PaginationControls, area: Rect) {
    frame.render_widget(Paragraph::new(Line::from(pagination_spans(controls))), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_single_page_hides_controls() {
        let controls = PaginationControls::new(1, 1, 4);
        assert_eq!(text(&pagination_spans(&controls)), " 4 items");
    }

    #[test]
    fn test_pagination_marks_current_page() {
        let controls = PaginationControls::new(2, 3, 23);
        let rendered = text(&pagination_spans(&controls));
        assert!(rendered.contains(" 1 [2] 3 "));
        assert!(rendered.contains("page 2 of 3 (23 items)"));
    }

    #[test]
    fn test_pagination_collapses_long_runs() {
        let controls = PaginationControls::new(6, 12, 100);
        let rendered = text(&pagination_spans(&controls));
        assert!(rendered.contains(" 1  …  5 [6] 7  …  12 "));
    }
}
