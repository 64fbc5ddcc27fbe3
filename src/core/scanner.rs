// ============================================================================
// LangSync - 视图扫描器
// ============================================================================
//
// 文件: src/core/scanner.rs
// 职责: 从视图模板中提取被引用的翻译键
// 边界:
//   - ✅ 视图目录遍历和过滤
//   - ✅ 翻译调用字面量正则提取
//   - ✅ 视图键集合构建（domain → 键集合）
//   - ❌ 不应包含语言文件读写
//   - ❌ 不应包含同步算法
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use anyhow::{Context, Result};
use regex::Regex;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

use crate::models::config::{Config, ConfigDefaults};
use crate::models::SourceKeySet;
use crate::utils::logger::Logger;
use crate::tf;

/// 视图扫描器
///
/// 只识别字面量参数的翻译调用；动态拼接的键无法静态发现，不在范围内。
pub struct ViewScanner {
    /// 视图模板根目录
    view_root: PathBuf,
    /// 参与扫描的模板扩展名
    extensions: Vec<String>,
    /// 识别的翻译调用形式
    functions: Vec<String>,
    /// 排除扫描的目录或文件模式
    ignore: Vec<String>,
    /// 是否启用详细日志
    verbose: bool,
}

impl ViewScanner {
    /// 创建新的视图扫描器
    pub fn new(view_root: PathBuf) -> Self {
        Self {
            view_root,
            extensions: Config::default_extensions(),
            functions: Config::default_functions(),
            ignore: Vec::new(),
            verbose: false,
        }
    }

    /// 设置模板扩展名
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// 设置翻译调用形式
    pub fn with_functions(mut self, functions: Vec<String>) -> Self {
        self.functions = functions;
        self
    }

    /// 设置忽略模式
    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    /// 启用详细日志
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 扫描视图目录，收集所有 domain.key 形式的翻译键引用
    pub fn scan(&self) -> Result<SourceKeySet> {
        if self.verbose {
            Logger::info(tf!("scan.scanning", self.view_root.display()));
        }

        let regex = self.build_call_regex()?;
        let mut keys = SourceKeySet::new();

        for entry in WalkDir::new(&self.view_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let extension = path.extension().and_then(|ext| ext.to_str());
            let listed = matches!(extension, Some(ext) if self.extensions.iter().any(|e| e == ext));
            if !listed {
                continue;
            }

            let relative = path
                .strip_prefix(&self.view_root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();
            if self.is_ignored(&relative) {
                debug!(path = %relative, "view ignored by pattern");
                continue;
            }

            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read view template: {}", path.display()))?;
            self.collect_from_content(&regex, &content, &mut keys);
        }

        if self.verbose {
            let total: usize = keys.values().map(|set| set.len()).sum();
            Logger::info(tf!("scan.found_keys", total, keys.len()));
        }

        Ok(keys)
    }

    /// 从单个模板内容中提取键引用
    fn collect_from_content(&self, regex: &Regex, content: &str, keys: &mut SourceKeySet) {
        for captures in regex.captures_iter(content) {
            let Some(literal) = captures.get(1).or_else(|| captures.get(2)) else {
                continue;
            };

            // 第一个点之前是 domain，其后是键路径；没有点的字面量不带 domain，跳过
            match literal.as_str().split_once('.') {
                Some((domain, key)) if !domain.is_empty() && !key.is_empty() => {
                    keys.entry(domain.to_string())
                        .or_default()
                        .insert(key.to_string());
                }
                _ => {
                    debug!(literal = literal.as_str(), "skipping key without domain");
                }
            }
        }
    }

    /// 构建识别翻译调用的正则
    ///
    /// 形如 trans('auth.failed') / @lang("auth.failed")，单双引号均可。
    fn build_call_regex(&self) -> Result<Regex> {
        let alternation = self
            .functions
            .iter()
            .map(|function| regex::escape(function))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = format!(
            r#"(?:{})\(\s*(?:'([A-Za-z0-9_./\-]+)'|"([A-Za-z0-9_./\-]+)")"#,
            alternation
        );
        Regex::new(&pattern).context("failed to build translation call pattern")
    }

    /// 检查相对路径是否应该被忽略
    fn is_ignored(&self, path: &str) -> bool {
        // node_modules 始终被忽略
        if path.contains("node_modules") {
            return true;
        }

        for pattern in &self.ignore {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(path) {
                    return true;
                }
            }
            // 非 glob 形式按路径组件做前缀匹配，不做任意子串匹配
            let component_prefix = path == pattern
                || path
                    .strip_prefix(pattern.as_str())
                    .map_or(false, |rest| rest.starts_with('/'));
            if component_prefix {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_view(root: &std::path::Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn extracts_literal_translation_calls() {
        let dir = tempdir().unwrap();
        write_view(
            dir.path(),
            "login.php",
            r#"<h1><?php echo trans('auth.failed'); ?></h1>
               <p>@lang("auth.throttle")</p>
               <span><?php echo __('messages.welcome.title'); ?></span>"#,
        );

        let keys = ViewScanner::new(dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(
            keys["auth"].iter().collect::<Vec<_>>(),
            vec!["failed", "throttle"]
        );
        assert!(keys["messages"].contains("welcome.title"));
    }

    #[test]
    fn skips_dynamic_and_domainless_keys() {
        let dir = tempdir().unwrap();
        write_view(
            dir.path(),
            "page.php",
            r#"trans($key) trans('welcome') trans('auth.failed')"#,
        );

        let keys = ViewScanner::new(dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(keys.len(), 1);
        assert_eq!(keys["auth"].iter().collect::<Vec<_>>(), vec!["failed"]);
    }

    #[test]
    fn honors_extension_list_and_ignore_patterns() {
        let dir = tempdir().unwrap();
        write_view(dir.path(), "keep.vue", r#"{{ trans('auth.kept') }}"#);
        write_view(dir.path(), "skip.txt", r#"trans('auth.text_file')"#);
        write_view(dir.path(), "vendor/skip.vue", r#"trans('auth.vendored')"#);

        let keys = ViewScanner::new(dir.path().to_path_buf())
            .with_ignore(vec!["vendor".to_string()])
            .scan()
            .unwrap();

        assert_eq!(keys["auth"].iter().collect::<Vec<_>>(), vec!["kept"]);
    }

    #[test]
    fn ignore_patterns_match_path_components_not_substrings() {
        let dir = tempdir().unwrap();
        write_view(dir.path(), "catalog.php", r#"trans('auth.catalog')"#);
        write_view(dir.path(), "log/page.php", r#"trans('auth.logged')"#);

        let keys = ViewScanner::new(dir.path().to_path_buf())
            .with_ignore(vec!["log".to_string()])
            .scan()
            .unwrap();

        // "log" 只排除 log/ 目录，不应作为子串命中 catalog.php
        assert!(keys["auth"].contains("catalog"));
        assert!(!keys["auth"].contains("logged"));
    }

    #[test]
    fn custom_function_list_is_respected() {
        let dir = tempdir().unwrap();
        write_view(dir.path(), "page.html", r#"{{ t('auth.custom') }}"#);

        let keys = ViewScanner::new(dir.path().to_path_buf())
            .with_functions(vec!["t".to_string()])
            .scan()
            .unwrap();

        assert!(keys["auth"].contains("custom"));
    }
}
