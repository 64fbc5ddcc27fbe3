// ============================================================================
// LangSync - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//   - ❌ 不应包含动态翻译生成
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 文件发现相关
    ("discover.scanning", "正在扫描语言文件: {}"),
    ("discover.found", "发现 {} 个翻译 domain"),
    ("discover.empty", "语言目录下没有发现语言文件"),
    // 视图扫描相关
    ("scan.scanning", "正在扫描视图: {}"),
    ("scan.found_keys", "发现 {} 个键，涉及 {} 个 domain"),
    // 同步遍次
    ("sync.reading_views", "正在读取视图中引用的翻译键..."),
    ("sync.removing_excess", "正在删除视图中已不再引用的键..."),
    ("sync.between_languages", "正在同步各语言文件..."),
    ("sync.key_added", "{} 已添加。"),
    ("sync.key_removed", "{} 已删除。"),
    ("sync.done", "完成！"),
    ("sync.nothing_to_do", "所有翻译键均已同步。"),
    // 同步汇总
    ("summary.title", "同步汇总"),
    ("summary.added", "补齐键数: {}"),
    ("summary.removed", "删除键数: {}"),
    ("summary.backfilled", "交叉补齐键数: {}"),
    ("summary.files_written", "写回文件次数: {}"),
    // 初始化命令
    ("init.start", "正在初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的文件"),
    ("init.config_created", "配置文件已创建: {}"),
    (
        "init.next_steps",
        "请调整 langsync.toml 中的 [paths] 配置，然后运行: langsync sync",
    ),
    ("init.create_failed", "创建配置文件失败: {}"),
    // 错误信息
    ("error.lang_root_missing", "语言目录不存在: {}"),
    ("error.view_root_missing", "视图目录不存在: {}"),
    ("error.sync_failed", "同步已中止: {}"),
];
