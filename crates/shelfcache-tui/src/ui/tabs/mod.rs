pub mod inventory;
pub mod schedule;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::styles;

/// A bordered panel holding one centered status line.
pub(crate) fn render_message(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(message.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
