// ============================================================================
// LangSync - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod init;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::config::{Config, RuntimeArgs};
use init::{handle_init, InitArgs};
use sync::{handle_sync, SyncArgs};

/// LangSync - Translation key sync tool
#[derive(Debug, Parser)]
#[command(name = "langsync")]
#[command(about = "Sync translation keys between view templates and language files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Language files root directory
    #[arg(long, global = true)]
    pub lang_path: Option<String>,

    /// View templates root directory
    #[arg(long, global = true)]
    pub view_path: Option<String>,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sync translation keys between views and language files
    Sync(SyncArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    match cli.command {
        Commands::Sync(args) => handle_sync(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        language: cli.language.clone(),
        lang_path: cli.lang_path.clone(),
        view_path: cli.view_path.clone(),
    }
}
