// ============================================================================
// LangSync - 翻译键同步器
// ============================================================================
//
// 文件: src/core/reconciler.rs
// 职责: 视图键与语言文件之间的三遍同步核心逻辑
// 边界:
//   - ✅ 视图键 → 语言文件的缺失补齐（Pass A）
//   - ✅ 语言文件 → 视图键的多余删除（Pass B，显式开启）
//   - ✅ 语言之间的交叉补齐（Pass C）
//   - ✅ 会话内翻译表缓存和写回
//   - ✅ 占位标签生成
//   - ❌ 不应包含视图扫描逻辑
//   - ❌ 不应包含文件发现逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// 算法设计:
// 1. Pass A: 对每个 (domain, 语言) 文件，用点分路径的结构化查找直接判定
//    视图键是否缺失（解析到叶子或分支均视为存在），缺失则补占位值。
//    不做"扁平化差集再回查"的两步法，从根上消除点分键与嵌套路径
//    冲突造成的误报。
// 2. Pass B（--delete 开启时）: 对每个表的扁平叶子键做反向差集；视图键
//    等于该键、或是该键的点分前缀（整组引用）时均视为仍被使用。
// 3. Pass C: 全部表扁平化为 "domain.key:language" 复合键视图，对照语言
//    全集找出单侧缺失项，逐个拆分复合键后按 Pass A 的单键补齐落盘。
//
// 遍次顺序固定 A → B → C。每个增删动作先输出报告行、后提交写回。
//
// ============================================================================

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::debug;

use crate::core::codec::TableCodec;
use crate::core::discovery::FileDiscovery;
use crate::models::{LanguageFileSet, SourceKeySet, SyncError, SyncResult, TranslationTable};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 会话内加载的单个翻译表
struct LoadedTable {
    /// 落盘路径
    path: PathBuf,
    /// 表内容
    table: TranslationTable,
}

/// 同步统计
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncStats {
    /// Pass A 补齐的键数
    pub added: usize,
    /// Pass B 删除的键数
    pub removed: usize,
    /// Pass C 交叉补齐的键数
    pub backfilled: usize,
    /// 写回的文件次数
    pub files_written: usize,
}

impl SyncStats {
    /// 本次运行是否没有任何变更
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.backfilled == 0
    }
}

/// 翻译键同步器
///
/// 一次运行对应一个会话对象，持有运行期间加载的全部翻译表。
pub struct Reconciler {
    /// 语言文件根目录（交叉补齐新建文件时定位路径）
    lang_root: PathBuf,
    /// 语言文件集合
    files: LanguageFileSet,
    /// 视图中引用的键集合
    source_keys: SourceKeySet,
    /// 为新增键生成占位标签
    generate: bool,
    /// 开启多余键删除
    delete: bool,
    /// 会话内已加载的表，按 (domain, 语言) 缓存
    tables: BTreeMap<(String, String), LoadedTable>,
    /// 统计
    stats: SyncStats,
}

impl Reconciler {
    /// 创建新的同步器
    pub fn new(lang_root: PathBuf, files: LanguageFileSet, source_keys: SourceKeySet) -> Self {
        Self {
            lang_root,
            files,
            source_keys,
            generate: false,
            delete: false,
            tables: BTreeMap::new(),
            stats: SyncStats::default(),
        }
    }

    /// 开启占位标签生成
    pub fn with_generate(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    /// 开启多余键删除
    pub fn with_delete(mut self, delete: bool) -> Self {
        self.delete = delete;
        self
    }

    /// 执行完整同步，遍次顺序固定 A → B → C
    ///
    /// 删除遍是破坏性操作，必须显式开启；放在 A 之后执行，避免删掉
    /// Pass A 刚要补进其他语言文件的键。
    pub fn run(&mut self) -> SyncResult<SyncStats> {
        self.sync_keys_from_views()?;

        if self.delete {
            self.sync_keys_to_views()?;
        }

        self.sync_keys_between_languages()?;

        Ok(self.stats)
    }

    // ------------------------------------------------------------------
    // Pass A: 补齐视图中引用但语言文件缺失的键
    // ------------------------------------------------------------------

    fn sync_keys_from_views(&mut self) -> SyncResult<()> {
        Logger::info(t!("sync.reading_views"));

        for (domain, language) in self.known_pairs() {
            let Some(wanted) = self.source_keys.get(&domain) else {
                continue;
            };
            let wanted: Vec<String> = wanted.iter().cloned().collect();

            // 结构化查找直接判定缺失；解析到分支的键是整组引用，同样视为存在
            let missing: Vec<String> = {
                let entry = self.load(&domain, &language)?;
                wanted
                    .into_iter()
                    .filter(|key| !entry.table.contains(key))
                    .collect()
            };

            if missing.is_empty() {
                continue;
            }

            let filled = self.fill_missing_keys(&domain, &missing, &language)?;
            self.stats.added += filled;
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Pass B: 删除语言文件中视图已不再引用的键（--delete 开启时）
    // ------------------------------------------------------------------

    fn sync_keys_to_views(&mut self) -> SyncResult<()> {
        Logger::info(t!("sync.removing_excess"));

        for (domain, language) in self.known_pairs() {
            // 视图中完全没有该 domain 的引用时不做删除，避免误删整个文件
            let Some(wanted) = self.source_keys.get(&domain) else {
                continue;
            };
            let wanted: BTreeSet<String> = wanted.clone();

            let excess: Vec<String> = {
                let entry = self.load(&domain, &language)?;
                entry
                    .table
                    .flat_keys()
                    .into_iter()
                    .filter(|key| !Self::covered_by_source(&wanted, key))
                    .collect()
            };

            if excess.is_empty() {
                continue;
            }

            let removed = self.remove_excess_keys(&domain, &excess, &language)?;
            self.stats.removed += removed;
        }

        Ok(())
    }

    /// 判断扁平叶子键是否仍被视图键覆盖
    ///
    /// 视图键可能引用整组（如 trans('validation.custom')），此时组下的
    /// 叶子键全部视为仍在使用。
    fn covered_by_source(wanted: &BTreeSet<String>, flat_key: &str) -> bool {
        if wanted.contains(flat_key) {
            return true;
        }
        wanted
            .iter()
            .any(|source_key| flat_key.len() > source_key.len()
                && flat_key.starts_with(source_key.as_str())
                && flat_key[source_key.len()..].starts_with('.'))
    }

    // ------------------------------------------------------------------
    // Pass C: 语言之间的交叉补齐
    // ------------------------------------------------------------------

    fn sync_keys_between_languages(&mut self) -> SyncResult<()> {
        Logger::info(t!("sync.between_languages"));

        let all_languages = FileDiscovery::languages(&self.files);

        // 全部表扁平化为 "domain.key:language" 复合键视图
        let mut view: BTreeMap<String, String> = BTreeMap::new();
        for (domain, language) in self.known_pairs() {
            let entry = self.load(&domain, &language)?;
            for (key, value) in entry.table.flatten() {
                view.insert(format!("{}.{}:{}", domain, key, language), value);
            }
        }

        let missing = Self::keys_existing_in_one_language_only(&view, &all_languages)?;

        for composite in missing {
            let (domain, key, language) = Self::split_composite(&composite)?;

            // 目标表中该路径已解析为叶子或分支时跳过，与 Pass A 的结构化
            // 判定一致；否则 set 会把既有分支整个覆盖成空叶子
            if self.load(&domain, &language)?.table.contains(&key) {
                continue;
            }

            debug!(%domain, %key, %language, "backfilling key across languages");

            let filled = self.fill_missing_keys(&domain, &[key], &language)?;
            self.stats.backfilled += filled;
        }

        Ok(())
    }

    /// 找出只存在于部分语言的 (domain, 键)，返回缺失侧的复合键
    fn keys_existing_in_one_language_only(
        view: &BTreeMap<String, String>,
        all_languages: &BTreeSet<String>,
    ) -> SyncResult<Vec<String>> {
        let mut present: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for composite in view.keys() {
            let (domain, key, language) = Self::split_composite(composite)?;
            present
                .entry(format!("{}.{}", domain, key))
                .or_default()
                .insert(language);
        }

        let mut missing = Vec::new();
        for (domain_key, languages) in present {
            for language in all_languages {
                if !languages.contains(language) {
                    missing.push(format!("{}:{}", domain_key, language));
                }
            }
        }
        Ok(missing)
    }

    /// 拆分复合键 "domain.key:language"
    ///
    /// 拆分失败说明不变量已被破坏，立即报错而不是静默跳过。
    fn split_composite(composite: &str) -> SyncResult<(String, String, String)> {
        let Some((body, language)) = composite.rsplit_once(':') else {
            return Err(SyncError::MalformedKey(composite.to_string()));
        };
        let Some((domain, key)) = body.split_once('.') else {
            return Err(SyncError::MalformedKey(composite.to_string()));
        };
        if domain.is_empty() || key.is_empty() || language.is_empty() {
            return Err(SyncError::MalformedKey(composite.to_string()));
        }
        Ok((domain.to_string(), key.to_string(), language.to_string()))
    }

    // ------------------------------------------------------------------
    // 单键补齐与删除
    // ------------------------------------------------------------------

    /// 为缺失键写入占位值并落盘，报告行先于写回输出
    fn fill_missing_keys(
        &mut self,
        domain: &str,
        keys: &[String],
        language: &str,
    ) -> SyncResult<usize> {
        let generate = self.generate;
        let mut filled = 0;

        for key in keys {
            let value = if generate {
                Self::generated_label(key)
            } else {
                String::new()
            };

            Logger::info(tf!(
                "sync.key_added",
                Colors::warn(&format!("\"{}.{}.{}\"", domain, key, language))
            ));

            let entry = self.load(domain, language)?;
            entry.table.set(key, value);
            filled += 1;
        }

        if filled > 0 {
            self.save(domain, language)?;
        }
        Ok(filled)
    }

    /// 删除多余键并落盘，报告行先于写回输出
    fn remove_excess_keys(
        &mut self,
        domain: &str,
        keys: &[String],
        language: &str,
    ) -> SyncResult<usize> {
        let mut removed = 0;

        for key in keys {
            Logger::info(tf!(
                "sync.key_removed",
                Colors::warn(&format!("\"{}.{}.{}\"", domain, key, language))
            ));

            let entry = self.load(domain, language)?;
            if entry.table.remove(key) {
                removed += 1;
            }
        }

        if removed > 0 {
            self.save(domain, language)?;
        }
        Ok(removed)
    }

    /// 由键名最后一段生成占位标签："login_failed" → "Login Failed"
    fn generated_label(key: &str) -> String {
        let segment = key.rsplit('.').next().unwrap_or(key);
        segment
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ------------------------------------------------------------------
    // 会话内表加载与写回
    // ------------------------------------------------------------------

    /// 已发现的 (domain, 语言) 对列表
    fn known_pairs(&self) -> Vec<(String, String)> {
        self.files
            .iter()
            .flat_map(|(domain, languages)| {
                languages
                    .keys()
                    .map(move |language| (domain.clone(), language.clone()))
            })
            .collect()
    }

    /// 懒加载 (domain, 语言) 对应的翻译表
    ///
    /// 集合中没有该语言文件时（交叉补齐的目标语言），沿用兄弟语言文件的
    /// 扩展名在语言目录下新建空表。
    fn load(&mut self, domain: &str, language: &str) -> SyncResult<&mut LoadedTable> {
        let id = (domain.to_string(), language.to_string());
        match self.tables.entry(id) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let loaded = match self.files.get(domain).and_then(|langs| langs.get(language)) {
                    Some(path) => LoadedTable {
                        path: path.clone(),
                        table: TableCodec::load(path)?,
                    },
                    None => {
                        let extension = self
                            .files
                            .get(domain)
                            .and_then(|langs| langs.values().next())
                            .and_then(|path| path.extension())
                            .and_then(|ext| ext.to_str())
                            .unwrap_or("json");
                        LoadedTable {
                            path: self
                                .lang_root
                                .join(language)
                                .join(format!("{}.{}", domain, extension)),
                            table: TranslationTable::new(),
                        }
                    }
                };
                Ok(slot.insert(loaded))
            }
        }
    }

    /// 写回 (domain, 语言) 对应的翻译表
    fn save(&mut self, domain: &str, language: &str) -> SyncResult<()> {
        let id = (domain.to_string(), language.to_string());
        if let Some(entry) = self.tables.get(&id) {
            TableCodec::save(&entry.path, &entry.table)?;
            self.stats.files_written += 1;
        }
        Ok(())
    }
}
