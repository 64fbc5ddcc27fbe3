// ============================================================================
// LangSync - Models 数据模型模块
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型模块入口和导出
// 边界:
//   - ✅ 数据模型子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含文件读写逻辑
//
// ============================================================================

pub mod config;
pub mod error;
pub mod translation;

// 重新导出常用类型
pub use error::{SyncError, SyncResult};
pub use translation::{LanguageFileSet, SourceKeySet, TransNode, TranslationTable};
