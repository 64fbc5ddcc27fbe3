// ============================================================================
// LangSync - 错误类型定义
// ============================================================================
//
// 文件: src/models/error.rs
// 职责: 同步过程错误类型定义
// 边界:
//   - ✅ 同步错误枚举定义
//   - ✅ 错误上下文信息（路径、键）携带
//   - ❌ 不应包含错误恢复逻辑
//   - ❌ 不应包含用户输出格式化
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// 同步过程错误
///
/// 所有错误都不重试，直接传播到命令层并终止本次运行。
#[derive(Debug, Error)]
pub enum SyncError {
    /// 语言文件不存在或不可读
    #[error("language file not found or unreadable: {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 语言文件写回失败
    #[error("failed to write language file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 语言文件内容无法解析
    #[error("malformed translation file: {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// 跨语言复合键无法拆分为 domain/key/language
    ///
    /// 输入合法时不应出现；出现即为逻辑不变量被破坏，必须立即失败。
    #[error("malformed composite key: {0:?}")]
    MalformedKey(String),

    /// 不支持的语言文件扩展名
    #[error("unsupported translation file extension: {path}")]
    UnsupportedFormat { path: PathBuf },
}

pub type SyncResult<T> = Result<T, SyncError>;
