// ============================================================================
// LangSync - 翻译数据模型
// ============================================================================
//
// 文件: src/models/translation.rs
// 职责: 翻译表和键集合数据结构定义
// 边界:
//   - ✅ 嵌套翻译表数据结构定义
//   - ✅ 点分路径的结构化读写操作
//   - ✅ 翻译表扁平化
//   - ✅ 数据序列化/反序列化
//   - ❌ 不应包含文件读写逻辑
//   - ❌ 不应包含同步算法
//   - ❌ 不应包含视图扫描逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// 视图中引用的翻译键集合（domain → 点分键集合）
pub type SourceKeySet = BTreeMap<String, BTreeSet<String>>;

/// 语言文件集合（domain → 语言代码 → 文件路径）
pub type LanguageFileSet = BTreeMap<String, BTreeMap<String, PathBuf>>;

/// 翻译树节点：叶子为翻译文本，分支为嵌套键组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransNode {
    /// 嵌套键组
    Branch(BTreeMap<String, TransNode>),
    /// 翻译文本（空字符串表示未翻译占位）
    Leaf(String),
}

/// 单个 (domain, 语言) 文件对应的翻译表
///
/// 键在表内唯一；BTreeMap 保证序列化时键按字典序稳定输出。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: BTreeMap<String, TransNode>,
}

impl TranslationTable {
    /// 创建空翻译表
    pub fn new() -> Self {
        Self::default()
    }

    /// 按点分路径查找节点
    fn node(&self, path: &str) -> Option<&TransNode> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        let mut node = self.entries.get(first)?;
        for part in parts {
            match node {
                TransNode::Branch(children) => node = children.get(part)?,
                TransNode::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// 判断点分路径是否存在（解析到叶子或分支均视为存在）
    pub fn contains(&self, path: &str) -> bool {
        self.node(path).is_some()
    }

    /// 按点分路径读取叶子文本
    pub fn get(&self, path: &str) -> Option<&str> {
        match self.node(path)? {
            TransNode::Leaf(value) => Some(value),
            TransNode::Branch(_) => None,
        }
    }

    /// 按点分路径写入叶子，必要时创建中间分支
    ///
    /// 路径上的叶子节点会被替换为分支（与 PHP Arr::set 行为一致）。
    pub fn set(&mut self, path: &str, value: String) {
        let parts: Vec<&str> = path.split('.').collect();
        Self::set_in(&mut self.entries, &parts, value);
    }

    fn set_in(map: &mut BTreeMap<String, TransNode>, parts: &[&str], value: String) {
        match parts {
            [] => {}
            [leaf] => {
                map.insert((*leaf).to_string(), TransNode::Leaf(value));
            }
            [head, rest @ ..] => {
                let entry = map
                    .entry((*head).to_string())
                    .or_insert_with(|| TransNode::Branch(BTreeMap::new()));
                // 路径与叶子冲突时以分支为准
                if matches!(entry, TransNode::Leaf(_)) {
                    *entry = TransNode::Branch(BTreeMap::new());
                }
                if let TransNode::Branch(children) = entry {
                    Self::set_in(children, rest, value);
                }
            }
        }
    }

    /// 按点分路径删除节点，返回是否确有删除
    ///
    /// 只摘除目标节点本身；清空的父分支保留，兄弟键不受影响。
    pub fn remove(&mut self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('.').collect();
        Self::remove_in(&mut self.entries, &parts)
    }

    fn remove_in(map: &mut BTreeMap<String, TransNode>, parts: &[&str]) -> bool {
        match parts {
            [] => false,
            [leaf] => map.remove(*leaf).is_some(),
            [head, rest @ ..] => match map.get_mut(*head) {
                Some(TransNode::Branch(children)) => Self::remove_in(children, rest),
                _ => false,
            },
        }
    }

    /// 扁平化为（点分叶子键 → 文本）映射
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut flat = BTreeMap::new();
        Self::flatten_in(&self.entries, "", &mut flat);
        flat
    }

    fn flatten_in(
        map: &BTreeMap<String, TransNode>,
        prefix: &str,
        flat: &mut BTreeMap<String, String>,
    ) {
        for (key, node) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match node {
                TransNode::Leaf(value) => {
                    flat.insert(path, value.clone());
                }
                TransNode::Branch(children) => Self::flatten_in(children, &path, flat),
            }
        }
    }

    /// 所有点分叶子键
    pub fn flat_keys(&self) -> Vec<String> {
        self.flatten().into_keys().collect()
    }

    /// 是否为空表
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_nested_branches() {
        let mut table = TranslationTable::new();
        table.set("auth.failed", "Failed.".to_string());
        table.set("auth.nested.label", "Label".to_string());

        assert_eq!(table.get("auth.failed"), Some("Failed."));
        assert_eq!(table.get("auth.nested.label"), Some("Label"));
        assert!(table.contains("auth"));
        assert!(table.contains("auth.nested"));
        assert_eq!(table.get("auth.nested"), None);
    }

    #[test]
    fn set_replaces_leaf_with_branch_on_conflict() {
        let mut table = TranslationTable::new();
        table.set("auth", "oops".to_string());
        table.set("auth.failed", "Failed.".to_string());

        assert_eq!(table.get("auth.failed"), Some("Failed."));
        assert_eq!(table.get("auth"), None);
    }

    #[test]
    fn remove_keeps_siblings() {
        let mut table = TranslationTable::new();
        table.set("auth.failed", "Failed.".to_string());
        table.set("auth.throttle", "Throttled.".to_string());

        assert!(table.remove("auth.failed"));
        assert!(!table.remove("auth.failed"));
        assert_eq!(table.get("auth.throttle"), Some("Throttled."));
    }

    #[test]
    fn remove_missing_branch_path_is_noop() {
        let mut table = TranslationTable::new();
        table.set("auth.failed", "Failed.".to_string());

        assert!(!table.remove("auth.failed.deeper"));
        assert!(!table.remove("validation.required"));
        assert_eq!(table.get("auth.failed"), Some("Failed."));
    }

    #[test]
    fn flatten_yields_dotted_leaf_keys() {
        let mut table = TranslationTable::new();
        table.set("failed", "Failed.".to_string());
        table.set("nested.label", "".to_string());

        let flat = table.flatten();
        assert_eq!(flat.get("failed").map(String::as_str), Some("Failed."));
        assert_eq!(flat.get("nested.label").map(String::as_str), Some(""));
        assert_eq!(table.flat_keys(), vec!["failed", "nested.label"]);
    }

    #[test]
    fn serde_round_trip_is_sorted() {
        let mut table = TranslationTable::new();
        table.set("b", "2".to_string());
        table.set("a.y", "1".to_string());
        table.set("a.x", "0".to_string());

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"a":{"x":"0","y":"1"},"b":"2"}"#);

        let parsed: TranslationTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
