use crate::chat_view::ChatView;
use crate::constants::PAGE_SCROLL_LINES;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub fn handle_chat_input(key: KeyEvent, view: &mut ChatView) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Enter => {
            view.submit();
        }
        KeyCode::PageUp => view.scroll_up(PAGE_SCROLL_LINES),
        KeyCode::PageDown => view.scroll_down(PAGE_SCROLL_LINES),
        KeyCode::Backspace => view.backspace(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => return KeyOutcome::Quit,
                    'u' => view.clear_input(),
                    _ => {}
                }
            } else {
                view.insert_char(c);
            }
        }
        _ => {}
    }
    KeyOutcome::Continue
}

/// Left click on the send control submits; the wheel scrolls the history.
pub fn handle_mouse_input(mouse: MouseEvent, view: &mut ChatView) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if view
                .send_button()
                .contains(Position::new(mouse.column, mouse.row))
            {
                view.submit();
            }
        }
        MouseEventKind::ScrollUp => view.scroll_up(1),
        MouseEventKind::ScrollDown => view.scroll_down(1),
        _ => {}
    }
}
