use crate::chat_view::ChatView;
use crate::constants::{INPUT_PLACEHOLDER, SEND_LABEL};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const ACCENT: Color = Color::Rgb(34, 197, 94);

/// Draws the input field and the send control, and places the cursor.
pub fn draw_input(f: &mut Frame<'_>, area: Rect, view: &mut ChatView) {
    let button_width = SEND_LABEL.width() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(button_width)])
        .split(area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = input_block.inner(chunks[0]);

    let text_width = u16::try_from(view.input().width()).unwrap_or(u16::MAX);
    let input_line = if view.input().is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            view.input().to_string(),
            Style::default().fg(Color::White),
        ))
    };

    // Keep the end of long input in view.
    let scroll_offset = text_width.saturating_sub(inner.width.saturating_sub(1));
    f.render_widget(
        Paragraph::new(input_line)
            .block(input_block)
            .scroll((0, scroll_offset)),
        chunks[0],
    );

    let button = Paragraph::new(SEND_LABEL)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        );
    f.render_widget(button, chunks[1]);
    view.set_send_button(chunks[1]);

    f.set_cursor_position(Position::new(
        inner.x + text_width - scroll_offset,
        inner.y,
    ));
}

pub fn draw_hints(f: &mut Frame<'_>, area: Rect) {
    let hints = Paragraph::new(
        "Enter or click Send to send · PgUp/PgDn to scroll · Ctrl+U to clear · Esc to quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);

    f.render_widget(hints, area);
}
