pub mod facade;
pub mod level;
pub mod logging;

// Re-export the level types from level module
pub use level::{Level, LevelParseError};
// Re-export the logger types and entry points
pub use logging::{
    critical, debug, error, info, init, init_with_config, log, logger, warning, DiagnosticLogger,
    LogConfig, DEFAULT_LOGGER_NAME,
};
// Re-export the log facade bridge installer
pub use facade::install as install_log_facade;

use chrono::{DateTime, Local};

/// 输出行中时间戳的固定格式（秒级精度，与地区设置无关）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 日志记录
///
/// 在调用方发起记录的瞬间创建，渲染输出后即被丢弃，
/// 不会被存储或排队。
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 捕获时刻的时间戳（创建时捕获，而非渲染时）
    pub timestamp: DateTime<Local>,
    /// 消息级别
    pub level: Level,
    /// 调用方提供的消息文本，原样保留（包括换行符）
    pub message: String,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳在此刻捕获
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
        }
    }

    /// 渲染为固定格式的输出行: `<时间戳> [<级别>]: <消息>`
    pub fn render(&self) -> String {
        format!(
            "{} [{}]: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}
