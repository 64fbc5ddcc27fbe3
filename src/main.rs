// ============================================================================
// LangSync - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 进程启动和顶层错误出口
// 边界:
//   - ✅ 日志订阅器初始化
//   - ✅ 全局配置初始化
//   - ✅ CLI 分发和退出码处理
//   - ❌ 不应包含命令实现逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use langsync::models::config::Config;
use langsync::tf;
use langsync::utils::logger::Logger;
use tracing_subscriber::EnvFilter;

fn main() {
    // 诊断日志走 stderr，用户可见输出保留给 stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = Config::initialize() {
        Logger::error(tf!("error.sync_failed", err));
        std::process::exit(1);
    }

    if let Err(err) = langsync::cli::run_cli() {
        Logger::error(tf!("error.sync_failed", err));
        std::process::exit(1);
    }
}
