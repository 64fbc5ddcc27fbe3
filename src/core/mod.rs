// ============================================================================
// LangSync - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//   - ❌ 不应包含工具函数实现
//
// ============================================================================

pub mod codec;
pub mod discovery;
pub mod reconciler;
pub mod scanner;

// 重新导出常用类型
pub use codec::TableCodec;
pub use discovery::FileDiscovery;
pub use reconciler::{Reconciler, SyncStats};
pub use scanner::ViewScanner;
