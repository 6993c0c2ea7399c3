use crate::level::Level;
use crate::logging::logger;
use log::{Log, Metadata, Record};
use std::sync::Once;

static INSTALL: Once = Once::new();
static BRIDGE: FacadeBridge = FacadeBridge;

/// log 门面桥接器，把 log 宏产生的记录转发给全局日志器
struct FacadeBridge;

/// 把 log 门面的级别映射为本地级别
///
/// 门面没有 CRITICAL 级别，没有任何映射产生它；Trace 并入 Debug。
fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Debug,
    }
}

impl Log for FacadeBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        logger().enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            logger().log(map_level(record.level()), record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// 安装 log 门面桥接（幂等）
///
/// 安装后，周边组件通过 `log::info!` 等宏输出的记录会进入
/// 全局日志器。若进程内已注册其他 log 实现，安装失败时仅在
/// 标准错误上提示，不影响调用方。
pub fn install() {
    INSTALL.call_once(|| {
        if log::set_logger(&BRIDGE).is_err() {
            eprintln!("herbivore-log: log 门面已被其他实现占用，桥接未安装");
            return;
        }
        // 级别过滤交给全局日志器本身
        log::set_max_level(log::LevelFilter::Trace);
    });
}
