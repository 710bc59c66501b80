// src/chat_view.rs

use crate::connection::{Channel, LinkEvent};
use crate::message::Message;
use crate::status_indicator::{LinkStatus, StatusIndicator};
use log::{debug, info, warn};
use ratatui::layout::Rect;

/// The view's hold on its connection.
///
/// Moves `Absent -> Open` on initialize and `Open -> Closed` on teardown.
/// There is no way back to `Open`.
pub enum Link {
    Absent,
    Open(Box<dyn Channel>),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Absent,
    Open,
    Closed,
}

pub struct ChatView {
    messages: Vec<Message>,
    input: String,
    link: Link,
    status: StatusIndicator,
    scroll: u16,
    max_scroll: u16,
    follow: bool,
    send_button: Rect,
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            link: Link::Absent,
            status: StatusIndicator::new(),
            scroll: 0,
            max_scroll: 0,
            follow: true,
            send_button: Rect::default(),
        }
    }

    /// Takes ownership of the view's one connection.
    ///
    /// Returns false and closes `channel` if the view already had one.
    pub fn initialize(&mut self, mut channel: Box<dyn Channel>, address: &str) -> bool {
        match self.link {
            Link::Absent => {
                info!("Chat view attached to {}", address);
                self.status.set_address(address);
                self.status.set_status(LinkStatus::Connecting);
                self.link = Link::Open(channel);
                true
            }
            _ => {
                warn!("Chat view already initialized, ignoring connection to {}", address);
                channel.close();
                false
            }
        }
    }

    /// Closes the connection. Only the first call has any effect.
    pub fn teardown(&mut self) {
        match std::mem::replace(&mut self.link, Link::Closed) {
            Link::Open(mut channel) => {
                info!("Chat view torn down, closing connection");
                channel.close();
                self.status.set_status(LinkStatus::Closed);
            }
            Link::Absent => debug!("Chat view torn down before it was initialized"),
            Link::Closed => {}
        }
    }

    pub fn link_state(&self) -> LinkState {
        match self.link {
            Link::Absent => LinkState::Absent,
            Link::Open(_) => LinkState::Open,
            Link::Closed => LinkState::Closed,
        }
    }

    pub fn on_link_event(&mut self, event: LinkEvent) {
        match event {
            LinkEvent::Frame(text) => {
                debug!("Inbound frame of {} bytes", text.len());
                self.push_message(Message::bot(text));
            }
            LinkEvent::Opened => self.status.set_status(LinkStatus::Open),
            LinkEvent::Closed => {
                info!("Connection closed");
                self.status.set_status(LinkStatus::Closed);
            }
            LinkEvent::Failed(reason) => {
                warn!("Connection failed: {}", reason);
                self.status.set_status(LinkStatus::Failed(reason));
            }
        }
    }

    /// Sends the input as a user message.
    ///
    /// Does nothing, and keeps the input, when it is blank or there is no
    /// open connection. Returns whether a message was sent.
    pub fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let Link::Open(channel) = &mut self.link else {
            return false;
        };

        let text = std::mem::take(&mut self.input);
        if let Err(e) = channel.send(&text) {
            warn!("Failed to send message: {}", e);
        }
        self.push_message(Message::user(text));
        true
    }

    pub fn status(&self) -> &StatusIndicator {
        &self.status
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        self.follow = true;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Records how far the message list can scroll at its drawn size.
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll = self.scroll.min(max_scroll);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.follow = false;
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
        if self.scroll == self.max_scroll {
            self.follow = true;
        }
    }

    /// Eases the list toward the newest message while following.
    pub fn tick(&mut self) {
        self.status.update_spinner();
        if self.follow && self.scroll < self.max_scroll {
            let step = ((self.max_scroll - self.scroll) / 2).max(1);
            self.scroll += step;
        }
    }

    pub fn send_button(&self) -> Rect {
        self.send_button
    }

    pub fn set_send_button(&mut self, area: Rect) {
        self.send_button = area;
    }
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ChatView {
    fn drop(&mut self) {
        self.teardown();
    }
}
