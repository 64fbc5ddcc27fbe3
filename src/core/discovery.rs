// ============================================================================
// LangSync - 语言文件发现
// ============================================================================
//
// 文件: src/core/discovery.rs
// 职责: 枚举语言目录树并建立语言文件集合
// 边界:
//   - ✅ 语言目录结构扫描（<语言代码>/<domain>.<扩展名>）
//   - ✅ 语言文件集合构建
//   - ✅ 语言代码全集收集
//   - ❌ 不应包含文件内容解析
//   - ❌ 不应包含同步算法
//   - ❌ 不应包含视图扫描逻辑
//
// ============================================================================

use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

use crate::models::{LanguageFileSet, SyncError, SyncResult};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 支持的翻译文件扩展名
const TABLE_EXTENSIONS: &[&str] = &["json", "yml", "yaml"];

/// 语言文件发现器
pub struct FileDiscovery {
    /// 语言文件根目录
    lang_root: PathBuf,
    /// 是否启用详细日志
    verbose: bool,
}

impl FileDiscovery {
    /// 创建新的文件发现器
    pub fn new(lang_root: PathBuf) -> Self {
        Self {
            lang_root,
            verbose: false,
        }
    }

    /// 启用详细日志
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 枚举语言目录树，建立 domain → (语言代码 → 文件路径) 集合
    ///
    /// 目录结构固定为一级语言目录加一级 domain 文件；更深的嵌套不参与。
    pub fn discover(&self) -> SyncResult<LanguageFileSet> {
        if self.verbose {
            Logger::info(tf!("discover.scanning", self.lang_root.display()));
        }

        // 根目录必须存在且可读
        std::fs::read_dir(&self.lang_root).map_err(|source| SyncError::FileNotFound {
            path: self.lang_root.clone(),
            source,
        })?;

        let mut files = LanguageFileSet::new();

        for entry in WalkDir::new(&self.lang_root)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let extension = path.extension().and_then(|ext| ext.to_str());
            if !matches!(extension, Some(ext) if TABLE_EXTENSIONS.contains(&ext)) {
                continue;
            }

            let Some(domain) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let Some(language) = path
                .parent()
                .and_then(|parent| parent.file_name())
                .and_then(|name| name.to_str())
            else {
                continue;
            };

            debug!(domain, language, path = %path.display(), "discovered language file");

            files
                .entry(domain.to_string())
                .or_default()
                .insert(language.to_string(), path.to_path_buf());
        }

        if self.verbose {
            Logger::info(tf!("discover.found", files.len()));
        }
        if files.is_empty() {
            Logger::warn(t!("discover.empty"));
        }

        Ok(files)
    }

    /// 语言代码全集（跨所有 domain 的并集）
    pub fn languages(files: &LanguageFileSet) -> BTreeSet<String> {
        files
            .values()
            .flat_map(|languages| languages.keys().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &std::path::Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn discovers_domains_per_language() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("en/auth.json"), "{}");
        touch(&dir.path().join("en/validation.json"), "{}");
        touch(&dir.path().join("fr/auth.json"), "{}");
        touch(&dir.path().join("en/notes.txt"), "ignored");
        touch(&dir.path().join("stray.json"), "{}");

        let files = FileDiscovery::new(dir.path().to_path_buf())
            .discover()
            .unwrap();

        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["auth", "validation"]);
        assert_eq!(files["auth"].keys().collect::<Vec<_>>(), vec!["en", "fr"]);
        assert_eq!(files["validation"].keys().collect::<Vec<_>>(), vec!["en"]);

        let languages = FileDiscovery::languages(&files);
        assert_eq!(languages.into_iter().collect::<Vec<_>>(), vec!["en", "fr"]);
    }

    #[test]
    fn missing_root_is_file_not_found() {
        let dir = tempdir().unwrap();
        let err = FileDiscovery::new(dir.path().join("absent"))
            .discover()
            .unwrap_err();
        assert!(matches!(err, SyncError::FileNotFound { .. }));
    }
}
