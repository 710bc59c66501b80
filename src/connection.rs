//! WebSocket link to the bot endpoint.
//!
//! A [`Connection`] is a handle to one background task that owns the socket.
//! Outbound text goes to the task over a queue. Inbound frames and state
//! changes come back as [`LinkEvent`]s on the receiver returned by
//! [`Connection::open`], in the order they happened. The [`LinkTask`] lets
//! the owner wait for the close handshake before the runtime goes away.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as Frame;

use crate::errors::{ChatError, ChatResult};

/// What the connection reports back to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// The handshake completed.
    Opened,
    /// One inbound text frame, verbatim.
    Frame(String),
    /// The link ended normally, from either side.
    Closed,
    /// The handshake or the socket failed. Nothing more will arrive.
    Failed(String),
}

/// A bidirectional text channel as seen by the chat view.
pub trait Channel: Send {
    /// Queues `text` to be sent as one text frame.
    fn send(&mut self, text: &str) -> ChatResult<()>;

    /// Starts closing the link. Calling it again does nothing.
    fn close(&mut self);
}

enum Outbound {
    Text(String),
    Close,
}

pub struct Connection {
    url: String,
    outbound: Option<mpsc::UnboundedSender<Outbound>>,
}

/// The background task that owns the socket.
pub struct LinkTask(JoinHandle<()>);

impl LinkTask {
    /// Waits up to `limit` for the task to end, which after a close request
    /// means the Close frame has been flushed. Returns false on timeout.
    pub async fn finish(self, limit: Duration) -> bool {
        match timeout(limit, self.0).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                error!("Link task failed: {}", e);
                false
            }
            Err(_) => {
                warn!("Link task still running after {:?}, leaving it", limit);
                false
            }
        }
    }
}

impl Connection {
    /// Opens a link to `url` in the background and returns right away.
    ///
    /// Text sent before the handshake finishes is delivered once it does.
    /// Must be called from within a tokio runtime.
    pub fn open(url: &str) -> (Self, mpsc::UnboundedReceiver<LinkEvent>, LinkTask) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run_link(url.to_string(), outbound_rx, event_tx));

        (
            Self {
                url: url.to_string(),
                outbound: Some(outbound_tx),
            },
            event_rx,
            LinkTask(task),
        )
    }
}

impl Channel for Connection {
    fn send(&mut self, text: &str) -> ChatResult<()> {
        let outbound = self.outbound.as_ref().ok_or(ChatError::ChannelClosed)?;
        outbound
            .send(Outbound::Text(text.to_owned()))
            .map_err(|_| ChatError::ChannelClosed)
    }

    fn close(&mut self) {
        if let Some(outbound) = self.outbound.take() {
            info!("Closing connection to {}", self.url);
            let _ = outbound.send(Outbound::Close);
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}

async fn run_link(
    url: String,
    mut outbound: mpsc::UnboundedReceiver<Outbound>,
    events: mpsc::UnboundedSender<LinkEvent>,
) {
    info!("Connecting to {}", url);
    let ws = match tokio_tungstenite::connect_async(url.as_str()).await {
        Ok((ws, _response)) => ws,
        Err(e) => {
            error!("Failed to connect to {}: {}", url, e);
            let _ = events.send(LinkEvent::Failed(e.to_string()));
            return;
        }
    };

    info!("Connected to {}", url);
    let _ = events.send(LinkEvent::Opened);

    let (mut sink, mut source) = ws.split();

    loop {
        tokio::select! {
            frame = source.next() => match frame {
                Some(Ok(Frame::Text(text))) => {
                    debug!("recv: {}", text.as_str());
                    if events.send(LinkEvent::Frame(text.as_str().to_owned())).is_err() {
                        // Nobody is listening any more.
                        let _ = sink.close().await;
                        break;
                    }
                }
                Some(Ok(Frame::Binary(data))) => {
                    warn!("Ignoring binary frame of {} bytes", data.len());
                }
                Some(Ok(Frame::Close(reason))) => {
                    info!("Server closed the connection: {:?}", reason);
                    // Flushes the close reply tungstenite queued for us.
                    if let Err(e) = sink.close().await {
                        warn!("Error while answering close: {}", e);
                    }
                    let _ = events.send(LinkEvent::Closed);
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!("WebSocket error: {}", e);
                    let _ = events.send(LinkEvent::Failed(e.to_string()));
                    break;
                }
                None => {
                    info!("Connection to {} ended", url);
                    let _ = events.send(LinkEvent::Closed);
                    break;
                }
            },
            request = outbound.recv() => match request {
                Some(Outbound::Text(text)) => {
                    debug!("send: {}", text);
                    if let Err(e) = sink.send(Frame::text(text)).await {
                        error!("Failed to send frame: {}", e);
                        let _ = events.send(LinkEvent::Failed(e.to_string()));
                        break;
                    }
                }
                Some(Outbound::Close) | None => {
                    if let Err(e) = sink.close().await {
                        warn!("Error while closing connection: {}", e);
                    }
                    let _ = events.send(LinkEvent::Closed);
                    break;
                }
            },
        }
    }

    let dropped = outbound.len();
    if dropped > 0 {
        warn!("Dropping {} unsent message(s)", dropped);
    }
}
