// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;

use crate::chat_view::ChatView;
use crate::config::Config;
use crate::connection::{Connection, LinkTask};
use crate::constants::CLOSE_TIMEOUT_MS;
use crate::errors::ChatResult;
use crate::key_handlers::{handle_chat_input, handle_mouse_input, KeyOutcome};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Events delivered to the UI loop from the terminal reader.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the chat screen until the user quits.
///
/// The address is resolved before the terminal is switched to raw mode so a
/// configuration problem is printed normally.
pub async fn run_ui(config: &Config) -> ChatResult<()> {
    let address = config.ws_url()?.to_string();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &address, config.tick_rate()).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    address: &str,
    tick_rate: Duration,
) -> ChatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    spawn_input_reader(tx, tick_rate);

    let (connection, mut link_events, link) = Connection::open(address);
    let mut view = ChatView::new();
    view.initialize(Box::new(connection), address);

    loop {
        terminal.draw(|f| draw(f, &mut view))?;

        tokio::select! {
            Some(event) = rx.recv() => match event {
                Event::Input(CEvent::Key(key)) => {
                    if handle_chat_input(key, &mut view) == KeyOutcome::Quit {
                        break;
                    }
                }
                Event::Input(CEvent::Mouse(mouse)) => handle_mouse_input(mouse, &mut view),
                Event::Input(_) => {}
                Event::Tick => view.tick(),
            },
            Some(link_event) = link_events.recv() => view.on_link_event(link_event),
            else => break,
        }
    }

    info!("Leaving chat");
    end_session(&mut view, link).await;
    Ok(())
}

/// Tears the view down and waits, bounded, for the Close frame to go out.
/// Returning early would let runtime shutdown cut the handshake off.
async fn end_session(view: &mut ChatView, link: LinkTask) -> bool {
    view.teardown();
    link.finish(Duration::from_millis(CLOSE_TIMEOUT_MS)).await
}

/// Polls the terminal on a blocking thread. Stops once the UI loop is gone.
fn spawn_input_reader(tx: mpsc::Sender<Event>, tick_rate: Duration) {
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Lays out the whole screen.
pub fn draw(f: &mut Frame, view: &mut ChatView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Messages
            Constraint::Length(1), // Connection status
            Constraint::Length(3), // Input + send
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    header::draw_header(f, chunks[0]);
    chat::draw_messages(f, chunks[1], view);
    view.status().render(f, chunks[2]);
    footer::draw_input(f, chunks[3], view);
    footer::draw_hints(f, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_view::tests::open_view;
    use crate::connection::tests::serve_once;
    use crate::connection::LinkEvent;
    use futures::StreamExt;
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Position};
    use tokio::time::timeout;
    use tokio_tungstenite::tungstenite::Message as Frame;

    fn render(view: &mut ChatView, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, view)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn find_row<'a>(rows: &'a [String], needle: &str) -> Option<(usize, &'a String)> {
        rows.iter().enumerate().find(|(_, row)| row.contains(needle))
    }

    #[test]
    fn empty_view_shows_title_placeholder_and_send() {
        let (mut view, _channel) = open_view();
        let rows = rows(&render(&mut view, 80, 20));

        assert!(find_row(&rows, "Chat with AI").is_some());
        assert!(find_row(&rows, "Type your message...").is_some());
        assert!(find_row(&rows, "[ Send ]").is_some());
        assert!(find_row(&rows, "Connecting to ws://localhost:4000").is_some());
    }

    #[test]
    fn user_on_the_right_bot_on_the_left() {
        let (mut view, _channel) = open_view();
        for c in "hello".chars() {
            view.insert_char(c);
        }
        view.submit();
        view.on_link_event(LinkEvent::Frame("hi there".to_string()));

        let rows = rows(&render(&mut view, 80, 20));
        let (user_row, user_line) = find_row(&rows, "hello").unwrap();
        let (bot_row, bot_line) = find_row(&rows, "hi there").unwrap();

        assert!(user_row < bot_row);
        assert!(user_line.find("hello").unwrap() > 40);
        assert!(bot_line.find("hi there").unwrap() < 10);
    }

    #[test]
    fn draw_records_send_button_and_scroll_limit() {
        let (mut view, _channel) = open_view();
        for i in 0..30 {
            view.on_link_event(LinkEvent::Frame(format!("message {}", i)));
        }
        render(&mut view, 80, 20);

        let button = view.send_button();
        assert!(button.width > 0);
        assert_eq!(button.y, 16);

        for _ in 0..40 {
            view.tick();
        }
        let rows = rows(&render(&mut view, 80, 20));
        assert!(find_row(&rows, "message 29").is_some());
        assert!(find_row(&rows, "message 0 ").is_none());
    }

    #[test]
    fn wide_input_keeps_cursor_at_the_right_edge() {
        let (mut view, _channel) = open_view();
        for _ in 0..65_540 {
            view.insert_char('a');
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, &mut view)).unwrap();

        // Input box spans columns 0..70; its inner area ends at column 68.
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(68, 17));
    }

    #[test]
    fn ending_a_session_sends_close_before_the_runtime_stops() {
        let server = tokio::runtime::Runtime::new().unwrap();
        let (close_tx, mut close_rx) = mpsc::unbounded_channel::<()>();
        let url = server.block_on(serve_once(move |mut ws| async move {
            while let Some(Ok(frame)) = ws.next().await {
                if let Frame::Close(_) = frame {
                    let _ = close_tx.send(());
                }
            }
        }));

        // Same shape as main: the client runtime is dropped right after.
        let client = tokio::runtime::Runtime::new().unwrap();
        client.block_on(async {
            let (connection, mut events, link) = Connection::open(&url);
            let mut view = ChatView::new();
            view.initialize(Box::new(connection), &url);

            let opened = timeout(Duration::from_secs(5), events.recv()).await.unwrap();
            assert_eq!(opened, Some(LinkEvent::Opened));
            assert!(end_session(&mut view, link).await);
        });
        drop(client);

        let received = server.block_on(async { timeout(Duration::from_secs(5), close_rx.recv()).await });
        assert!(matches!(received, Ok(Some(()))), "server never saw a Close frame");
    }
}
