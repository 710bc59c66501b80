// Environment variables
pub const ENV_RUNTIME: &str = "BOTCHAT_ENV";
pub const ENV_WS_URL_DEV: &str = "BOTCHAT_WS_URL_DEV";
pub const ENV_WS_URL_PROD: &str = "BOTCHAT_WS_URL_PROD";
pub const ENV_LOG_LEVEL: &str = "BOTCHAT_LOG_LEVEL";
pub const ENV_TICK_RATE_MS: &str = "BOTCHAT_TICK_RATE_MS";

// Defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TICK_RATE_MS: u64 = 50;
pub const APP_DIR_NAME: &str = "botchat";
pub const CONFIG_FILE_NAME: &str = "config.json";

// UI Constants
pub const TITLE: &str = "Chat with AI";
pub const INPUT_PLACEHOLDER: &str = "Type your message...";
pub const SEND_LABEL: &str = "[ Send ]";
pub const PAGE_SCROLL_LINES: u16 = 5;

// Connection
pub const CLOSE_TIMEOUT_MS: u64 = 2000;
