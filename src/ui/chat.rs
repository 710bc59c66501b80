use crate::chat_view::ChatView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph},
    Frame,
};

/// Draws the message history and records how far it can scroll.
pub fn draw_messages(f: &mut Frame<'_>, area: Rect, view: &mut ChatView) {
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);

    if view.messages().is_empty() {
        view.set_max_scroll(0);
        let hint = Paragraph::new("No messages yet. Say hello!")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in view.messages() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(message.render(inner.width));
    }

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    view.set_max_scroll(total_lines.saturating_sub(inner.height));

    let messages = Paragraph::new(lines)
        .block(block)
        .scroll((view.scroll_offset(), 0));
    f.render_widget(messages, area);
}
