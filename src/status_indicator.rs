use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Connecting,
    Open,
    Closed,
    Failed(String),
}

/// One-line connection status shown above the input.
#[derive(Debug)]
pub struct StatusIndicator {
    status: LinkStatus,
    address: String,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            status: LinkStatus::Connecting,
            address: String::new(),
            spinner_idx: 0,
        }
    }

    pub fn status(&self) -> &LinkStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: LinkStatus) {
        self.status = status;
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let (icon, text, color) = match &self.status {
            LinkStatus::Connecting => (
                spinner_frames[self.spinner_idx % spinner_frames.len()],
                format!("Connecting to {}...", self.address),
                Color::DarkGray,
            ),
            LinkStatus::Open => ("●", format!("Connected to {}", self.address), Color::Green),
            LinkStatus::Closed => ("○", "Disconnected".to_string(), Color::Yellow),
            LinkStatus::Failed(reason) => ("✗", format!("Connection failed: {}", reason), Color::Red),
        };

        let status = Line::from(vec![
            Span::styled(icon, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(text, Style::default().fg(color)),
        ]);

        frame.render_widget(Paragraph::new(status).alignment(Alignment::Left), area);
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
