use std::thread;

use herbivore_log as hlog;

fn main() {
    hlog::init();

    // 多个线程并发写日志，每条消息保持完整的一行
    let mut handles = Vec::new();
    for worker in 0..4 {
        handles.push(thread::spawn(move || {
            for seq in 0..25 {
                hlog::info(format!("worker {} 处理任务 {}", worker, seq));
            }
        }));
    }

    for handle in handles {
        let _ = handle.join();
    }

    hlog::info("所有 worker 已结束");
}
