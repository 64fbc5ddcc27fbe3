// ============================================================================
// LangSync - CLI Sync 命令
// ============================================================================
//
// 文件: src/cli/sync.rs
// 职责: 翻译键同步命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用核心同步器执行同步
//   - ✅ 同步结果格式化输出
//   - ✅ 用户交互和提示信息
//   - ❌ 不应包含具体同步逻辑
//   - ❌ 不应包含文件扫描逻辑
//   - ❌ 不应包含翻译表读写逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::{FileDiscovery, Reconciler, ViewScanner};
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 同步视图翻译键与语言文件
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// 为新增的键生成占位标签（login_failed → "Login Failed"）
    #[arg(long)]
    pub generate: bool,

    /// 删除视图中已不再引用的键（破坏性操作，默认关闭）
    #[arg(long)]
    pub delete: bool,
}

pub fn handle_sync(args: SyncArgs) -> Result<()> {
    let lang_root = Config::get_lang_root();
    let view_root = Config::get_view_root();
    let verbose = Config::get_verbose();

    if !lang_root.exists() {
        anyhow::bail!(tf!("error.lang_root_missing", lang_root.display()));
    }
    if !view_root.exists() {
        anyhow::bail!(tf!("error.view_root_missing", view_root.display()));
    }

    // 建立语言文件集合
    let files = FileDiscovery::new(lang_root.clone())
        .with_verbose(verbose)
        .discover()?;

    // 提取视图中引用的翻译键
    let source_keys = ViewScanner::new(view_root)
        .with_extensions(Config::get_scan_extensions())
        .with_functions(Config::get_scan_functions())
        .with_ignore(Config::get_ignore_patterns()?)
        .with_verbose(verbose)
        .scan()?;

    // 三遍同步，顺序固定：补齐 → 删除（可选）→ 交叉补齐
    let stats = Reconciler::new(lang_root, files, source_keys)
        .with_generate(args.generate)
        .with_delete(args.delete)
        .run()?;

    if stats.is_noop() {
        Logger::info(t!("sync.nothing_to_do"));
    }
    Logger::success(t!("sync.done"));

    summary::render_sync_summary(&stats);

    Ok(())
}
