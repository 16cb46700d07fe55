//! Pipeline progress logging.
//!
//! Thin helpers over `tracing` so stage code reads as a sequence of
//! `log_info` / `log_success` / `log_warning` calls. The subscriber is
//! installed by the binary; library callers get whatever subscriber they set up.

use tracing::{info, warn};

/// Log level as shown in progress output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠ ",
        }
    }
}

/// Emit a progress message at the given level.
pub fn log(level: LogLevel, msg: impl Into<String>) {
    let msg = msg.into();
    match level {
        LogLevel::Info | LogLevel::Success => info!("{}{}", level.prefix(), msg),
        LogLevel::Warning => warn!("{}{}", level.prefix(), msg),
    }
}

pub fn log_info(msg: impl Into<String>) {
    log(LogLevel::Info, msg);
}

pub fn log_success(msg: impl Into<String>) {
    log(LogLevel::Success, msg);
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogLevel::Warning, msg);
}

/// Install the stderr subscriber used by the CLI.
///
/// Honours `RUST_LOG`, defaulting to `info`. Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
