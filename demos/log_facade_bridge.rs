use anyhow::Result;
use herbivore_log as hlog;

fn main() -> Result<()> {
    // 最低级别从字符串解析，演示配置入口
    let min_level: hlog::Level = "info".parse()?;
    hlog::init_with_config(hlog::LogConfig::new("herbivore").with_min_level(min_level));

    // 安装 log 门面桥接后，log 宏的输出进入同一日志器
    hlog::install_log_facade();

    log::info!("通过 log 门面输出");
    log::warn!("映射为 WARNING 级别");
    log::debug!("低于最低级别，被丢弃");

    Ok(())
}
