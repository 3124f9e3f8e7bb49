//! arch-tool - 宿主 agent 的 tool 调用入口

use tracing_subscriber::EnvFilter;

fn main() {
    // stdout 留给 JSON 输出
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = arch::tool::run_hook() {
        eprintln!("Tool error: {}", e);
        std::process::exit(1);
    }
}
