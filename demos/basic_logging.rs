use herbivore_log as hlog;

fn main() {
    // 初始化全局日志系统（重复调用是安全的）
    let log = hlog::init();
    println!("日志器名称: {}", log.name());

    // 句柄上的五个级别入口
    log.debug("starting scan");
    log.info("probing exit relays");
    log.warning("slow response from relay");
    log.error("connection failed: timeout");
    log.critical("scan aborted");

    // 模块级入口与句柄方法等价
    hlog::info("scan finished");
}
