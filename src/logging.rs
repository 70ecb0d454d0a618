// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 日志输出到 stderr，stdout 保留给报价文本等结果
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: warn）
///   例如: RUST_LOG=debug 或 RUST_LOG=paket_konfigurator=trace
///
/// # 参数
/// - json: 是否输出 JSON 格式日志
///
/// # 示例
/// ```no_run
/// use paket_konfigurator::logging;
/// logging::init(false);
/// ```
pub fn init(json: bool) {
    // 从环境变量读取日志级别，默认为 warn（命令行输出保持干净）
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
