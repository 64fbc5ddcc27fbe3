// ============================================================================
// LangSync - 同步结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 同步结果汇总显示
// 边界:
//   - ✅ 同步结果汇总显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含同步执行逻辑
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含数据处理逻辑
//
// ============================================================================

use crate::core::SyncStats;
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 渲染同步结果汇总
pub fn render_sync_summary(stats: &SyncStats) {
    Logger::info("");
    Logger::info(t!("summary.title"));
    Logger::info("═══════════════════════════════════════");
    Logger::info(tf!("summary.added", Colors::success(&stats.added.to_string())));
    Logger::info(tf!(
        "summary.removed",
        Colors::warn(&stats.removed.to_string())
    ));
    Logger::info(tf!(
        "summary.backfilled",
        Colors::info(&stats.backfilled.to_string())
    ));
    Logger::info(tf!("summary.files_written", stats.files_written));
    Logger::info("═══════════════════════════════════════");
}
