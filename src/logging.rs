use crate::level::Level;
use crate::LogRecord;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

/// 全局日志实例
static LOGGER: OnceLock<DiagnosticLogger> = OnceLock::new();

/// 进程内全局日志器的固定名称
pub const DEFAULT_LOGGER_NAME: &str = "herbivore";

/// 日志初始化配置
///
/// 输出流（标准错误）与行格式是固定的，可配置项只有
/// 日志器名称与最低输出级别。
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志器名称
    pub name: String,
    /// 最低输出级别，低于该级别的消息被丢弃
    pub min_level: Level,
}

impl LogConfig {
    /// 创建新的日志配置
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: Level::Debug,
        }
    }

    /// 设置最低输出级别
    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig::new(DEFAULT_LOGGER_NAME)
    }
}

/// 诊断日志器
///
/// 同一实例可被任意多个线程共享，内部互斥锁保证每次调用
/// 恰好输出完整的一行，不会与其他线程的输出逐字符交错。
/// 跨线程之间的先后顺序不做保证。
pub struct DiagnosticLogger {
    name: String,
    min_level: Level,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl DiagnosticLogger {
    /// 创建输出到标准错误的日志器
    pub fn new(config: LogConfig) -> Self {
        Self::with_sink(config, Box::new(io::stderr()))
    }

    /// 使用自定义输出流创建日志器
    pub fn with_sink(config: LogConfig, sink: Box<dyn Write + Send>) -> Self {
        Self {
            name: config.name,
            min_level: config.min_level,
            sink: Mutex::new(sink),
        }
    }

    /// 日志器名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 最低输出级别
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// 判断某级别的消息是否会被输出
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// 记录一条消息
    ///
    /// 时间戳在进入本方法时捕获。写入在调用线程上同步完成，
    /// 每次调用输出一整行并立即刷新。写入失败时静默丢弃该条
    /// 消息，绝不干扰调用方的控制流。
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        let record = LogRecord::new(level, message);
        self.write_record(&record);
    }

    /// 记录 DEBUG 级别消息
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    /// 记录 INFO 级别消息
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    /// 记录 WARNING 级别消息
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    /// 记录 ERROR 级别消息
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// 记录 CRITICAL 级别消息
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Level::Critical, message);
    }

    fn write_record(&self, record: &LogRecord) {
        // 锁中毒时放弃本条输出，日志调用永不 panic
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", record.render());
            let _ = sink.flush();
        }
    }
}

/// 初始化全局日志系统（幂等）
///
/// 使用固定配置：名称 "herbivore"，最低级别 DEBUG，输出到
/// 标准错误。重复调用不会附加新的输出通道，始终返回首次
/// 初始化的实例。
pub fn init() -> &'static DiagnosticLogger {
    init_with_config(LogConfig::default())
}

/// 使用指定配置初始化全局日志系统（幂等）
///
/// 若全局实例已存在，传入的配置被忽略，返回已有实例。
pub fn init_with_config(config: LogConfig) -> &'static DiagnosticLogger {
    LOGGER.get_or_init(|| DiagnosticLogger::new(config))
}

/// 获取全局日志实例
///
/// 若尚未调用 [`init`]，以默认配置完成初始化后返回。
pub fn logger() -> &'static DiagnosticLogger {
    LOGGER.get_or_init(|| DiagnosticLogger::new(LogConfig::default()))
}

/// 通过全局日志器记录一条消息
pub fn log(level: Level, message: impl Into<String>) {
    logger().log(level, message);
}

/// 通过全局日志器记录 DEBUG 级别消息
pub fn debug(message: impl Into<String>) {
    logger().debug(message);
}

/// 通过全局日志器记录 INFO 级别消息
pub fn info(message: impl Into<String>) {
    logger().info(message);
}

/// 通过全局日志器记录 WARNING 级别消息
pub fn warning(message: impl Into<String>) {
    logger().warning(message);
}

/// 通过全局日志器记录 ERROR 级别消息
pub fn error(message: impl Into<String>) {
    logger().error(message);
}

/// 通过全局日志器记录 CRITICAL 级别消息
pub fn critical(message: impl Into<String>) {
    logger().critical(message);
}
