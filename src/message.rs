// src/message.rs

use chrono::{DateTime, Local};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the chat history. Never changes after it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    text: String,
    received_at: DateTime<Local>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            received_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the message as a bubble for a list `width` columns wide.
    /// User bubbles hug the right edge, bot bubbles the left.
    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let alignment = self.alignment();
        let style = self.bubble_style();

        // Bubbles take at most three quarters of the row; 2 columns of padding.
        let bubble_width = (width as usize * 3 / 4).max(4);
        let wrap_width = bubble_width.saturating_sub(2).max(1);

        let wrapped: Vec<String> = wrap(&self.text, wrap_width)
            .into_iter()
            .map(|line| line.into_owned())
            .collect();
        let widest = wrapped
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line<'static>> = wrapped
            .into_iter()
            .map(|text| {
                let pad = widest.saturating_sub(UnicodeWidthStr::width(text.as_str()));
                Line::from(Span::styled(
                    format!(" {}{} ", text, " ".repeat(pad)),
                    style,
                ))
                .alignment(alignment)
            })
            .collect();

        lines.push(self.render_stamp(alignment));
        lines
    }

    fn render_stamp(&self, alignment: Alignment) -> Line<'static> {
        let who = match self.sender {
            Sender::User => "You",
            Sender::Bot => "Bot",
        };
        Line::from(Span::styled(
            format!("{} · {}", who, self.received_at.format("%H:%M")),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ))
        .alignment(alignment)
    }

    fn alignment(&self) -> Alignment {
        match self.sender {
            Sender::User => Alignment::Right,
            Sender::Bot => Alignment::Left,
        }
    }

    fn bubble_style(&self) -> Style {
        match self.sender {
            Sender::User => Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(34, 197, 94)),
            Sender::Bot => Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(253, 186, 116)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn user_messages_render_on_the_right() {
        let lines = Message::user("hello").render(40);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(line_text(&lines[0]), " hello ");
        assert!(line_text(&lines[1]).starts_with("You · "));
    }

    #[test]
    fn bot_messages_render_on_the_left() {
        let lines = Message::bot("hi there").render(40);
        assert_eq!(lines[0].alignment, Some(Alignment::Left));
        assert_eq!(line_text(&lines[0]), " hi there ");
        assert!(line_text(&lines[1]).starts_with("Bot · "));
    }

    #[test]
    fn long_text_wraps_into_padded_rows() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        let lines = Message::bot(text).render(24);
        let bubble = &lines[..lines.len() - 1];
        assert!(bubble.len() > 1);

        let widths: Vec<usize> = bubble
            .iter()
            .map(|l| UnicodeWidthStr::width(line_text(l).as_str()))
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(widths[0] <= 18);
    }

    #[test]
    fn text_is_kept_verbatim() {
        let message = Message::user("  spaced  ");
        assert_eq!(message.text(), "  spaced  ");
        assert_eq!(message.sender(), Sender::User);
    }
}
