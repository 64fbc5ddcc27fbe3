// ============================================================================
// LangSync - UI 界面模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 用户界面组件模块入口和导出
// 边界:
//   - ✅ UI 子模块导出
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

pub mod summary;
