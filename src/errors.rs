// src/errors.rs

use thiserror::Error;

/// Errors raised while starting or running the chat client.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// The connection's writer task is gone, so nothing more can be sent.
    #[error("Connection is closed")]
    ChannelClosed,

    #[error("Logger error: {0}")]
    Logger(String),
}

impl ChatError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ChatError {
    fn from(e: tokio_tungstenite::tungstenite::Error) -> Self {
        ChatError::WebSocket(e.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for ChatError {
    fn from(e: flexi_logger::FlexiLoggerError) -> Self {
        ChatError::Logger(e.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
