// ============================================================================
// LangSync - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明和公共 API 导出
// 边界:
//   - ✅ 顶层模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含进程入口逻辑
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

// 重新导出常用类型
pub use crate::core::{FileDiscovery, Reconciler, SyncStats, TableCodec, ViewScanner};
pub use crate::models::{LanguageFileSet, SourceKeySet, SyncError, TranslationTable};
