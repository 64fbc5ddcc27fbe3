// ============================================================================
// LangSync - 翻译文件编解码器
// ============================================================================
//
// 文件: src/core/codec.rs
// 职责: 翻译表文件的加载与写回
// 边界:
//   - ✅ 按扩展名选择 JSON/YAML 编解码
//   - ✅ 翻译文件读取和解析
//   - ✅ 翻译表序列化和写回
//   - ✅ 稳定的键排序输出
//   - ❌ 不应包含同步算法
//   - ❌ 不应包含文件发现逻辑
//   - ❌ 不应包含用户输出格式化
//
// ============================================================================

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::models::{SyncError, SyncResult, TranslationTable};

/// 翻译文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableFormat {
    Json,
    Yaml,
}

/// 翻译表编解码器
pub struct TableCodec;

impl TableCodec {
    /// 按扩展名识别文件格式
    fn format_of(path: &Path) -> SyncResult<TableFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(TableFormat::Json),
            Some("yml") | Some("yaml") => Ok(TableFormat::Yaml),
            _ => Err(SyncError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// 加载翻译表
    ///
    /// 文件不存在或不可读返回 FileNotFound；内容无法解析返回 Malformed。
    pub fn load(path: &Path) -> SyncResult<TranslationTable> {
        debug!(path = %path.display(), "loading translation table");

        let format = Self::format_of(path)?;
        let content = fs::read_to_string(path).map_err(|source| SyncError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        // 空文件视为空表
        if content.trim().is_empty() {
            return Ok(TranslationTable::new());
        }

        match format {
            TableFormat::Json => {
                serde_json::from_str(&content).map_err(|err| SyncError::Malformed {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })
            }
            TableFormat::Yaml => {
                serde_yaml::from_str(&content).map_err(|err| SyncError::Malformed {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })
            }
        }
    }

    /// 序列化并写回翻译表
    ///
    /// 键按字典序稳定输出；目标路径不可写返回 FileWrite。
    pub fn save(path: &Path, table: &TranslationTable) -> SyncResult<()> {
        debug!(path = %path.display(), "saving translation table");

        let content = match Self::format_of(path)? {
            TableFormat::Json => {
                let mut json =
                    serde_json::to_string_pretty(table).map_err(|err| SyncError::Malformed {
                        path: path.to_path_buf(),
                        message: err.to_string(),
                    })?;
                json.push('\n');
                json
            }
            TableFormat::Yaml => {
                serde_yaml::to_string(table).map_err(|err| SyncError::Malformed {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })?
            }
        };

        // 跨语言补齐可能写入尚无该语言目录的新文件
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SyncError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| SyncError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("auth.json");

        let mut table = TranslationTable::new();
        table.set("failed", "Failed.".to_string());
        table.set("nested.label", "".to_string());

        TableCodec::save(&path, &table).unwrap();
        let loaded = TableCodec::load(&path).unwrap();
        assert_eq!(loaded, table);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("auth.yml");

        let mut table = TranslationTable::new();
        table.set("throttle", "Too many attempts.".to_string());

        TableCodec::save(&path, &table).unwrap();
        assert_eq!(TableCodec::load(&path).unwrap(), table);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempdir().unwrap();
        let err = TableCodec::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SyncError::FileNotFound { .. }));
    }

    #[test]
    fn malformed_content_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = TableCodec::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::Malformed { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let err = TableCodec::load(&dir.path().join("auth.php")).unwrap_err();
        assert!(matches!(err, SyncError::UnsupportedFormat { .. }));
    }

    #[test]
    fn unwritable_target_is_file_write() {
        let dir = tempdir().unwrap();
        // 父路径被普通文件占据，目录创建和写入都无法进行
        let blocker = dir.path().join("en");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = TableCodec::save(&blocker.join("auth.json"), &TranslationTable::new())
            .unwrap_err();
        assert!(matches!(err, SyncError::FileWrite { .. }));
        assert!(err.to_string().contains("auth.json"));
    }

    #[test]
    fn empty_file_loads_as_empty_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "").unwrap();

        assert!(TableCodec::load(&path).unwrap().is_empty());
    }
}
