// ============================================================================
// LangSync - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置验证和默认值
//   - ✅ 配置文件读写操作
//   - ✅ 配置项默认数据
//   - ❌ 不应包含配置应用逻辑
//   - ❌ 不应包含同步业务逻辑
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含文件系统底层操作
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// LangSync 配置文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 路径配置
    #[serde(default)]
    pub paths: PathsConfig,
    /// 视图扫描配置
    #[serde(default)]
    pub scan: ScanConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置（工具自身界面语言）
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 路径配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// 语言文件根目录（结构为 <语言代码>/<domain>.<扩展名>）
    #[serde(default)]
    pub lang: String,
    /// 视图模板根目录
    #[serde(default)]
    pub views: String,
}

/// 视图扫描配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// 参与扫描的模板扩展名
    #[serde(default)]
    pub extensions: Vec<String>,
    /// 识别的翻译调用形式
    #[serde(default)]
    pub functions: Vec<String>,
    /// 排除扫描的目录或文件模式
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// 输出配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default)]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub language: Option<String>,
    pub lang_path: Option<String>,
    pub view_path: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认语言文件根目录
    fn default_lang_path() -> String {
        "resources/lang".to_string()
    }

    /// 获取默认视图模板根目录
    fn default_view_path() -> String {
        "resources/views".to_string()
    }

    /// 获取默认模板扩展名
    fn default_extensions() -> Vec<String> {
        vec!["php".to_string(), "vue".to_string(), "html".to_string()]
    }

    /// 获取默认翻译调用形式
    fn default_functions() -> Vec<String> {
        vec![
            "trans".to_string(),
            "trans_choice".to_string(),
            "Lang::get".to_string(),
            "Lang::choice".to_string(),
            "Lang::trans".to_string(),
            "Lang::transChoice".to_string(),
            "@lang".to_string(),
            "@choice".to_string(),
            "__".to_string(),
        ]
    }

    /// 获取默认忽略模式
    fn default_ignore_patterns() -> Vec<String> {
        vec![".git".to_string(), "*.log".to_string()]
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_config()?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    fn load_config() -> anyhow::Result<Self> {
        let config_path = PathBuf::from("langsync.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // 如果配置文件不存在，使用默认配置
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        // 合并参数
        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(language) = args.language {
            config.i18n.language = language;
        }
        if let Some(lang_path) = args.lang_path {
            config.paths.lang = lang_path;
        }
        if let Some(view_path) = args.view_path {
            config.paths.views = view_path;
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &PathBuf) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        Self {
            paths: PathsConfig {
                lang: Self::default_lang_path(),
                views: Self::default_view_path(),
            },
            scan: ScanConfig {
                extensions: Self::default_extensions(),
                functions: Self::default_functions(),
                ignore: Self::default_ignore_patterns(),
            },
            output: OutputConfig {
                verbose: Self::default_verbose(),
            },
            i18n: I18nConfig {
                language: Self::default_language(),
            },
        }
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &PathBuf) -> anyhow::Result<()> {
        let default_config = Self::generate_default_template();
        default_config.save_to_file(config_path)?;
        Ok(())
    }

    /// 获取语言文件根目录（带默认值）
    pub fn get_lang_root() -> PathBuf {
        match Self::read_global(|config| config.paths.lang.clone()) {
            Ok(lang) if !lang.is_empty() => PathBuf::from(lang),
            _ => PathBuf::from(Self::default_lang_path()),
        }
    }

    /// 获取视图模板根目录（带默认值）
    pub fn get_view_root() -> PathBuf {
        match Self::read_global(|config| config.paths.views.clone()) {
            Ok(views) if !views.is_empty() => PathBuf::from(views),
            _ => PathBuf::from(Self::default_view_path()),
        }
    }

    /// 获取模板扩展名列表（带默认值）
    pub fn get_scan_extensions() -> Vec<String> {
        match Self::read_global(|config| config.scan.extensions.clone()) {
            Ok(extensions) if !extensions.is_empty() => extensions,
            _ => Self::default_extensions(),
        }
    }

    /// 获取翻译调用形式列表（带默认值）
    pub fn get_scan_functions() -> Vec<String> {
        match Self::read_global(|config| config.scan.functions.clone()) {
            Ok(functions) if !functions.is_empty() => functions,
            _ => Self::default_functions(),
        }
    }

    /// 获取忽略模式列表
    pub fn get_ignore_patterns() -> anyhow::Result<Vec<String>> {
        Self::read_global(|config| config.scan.ignore.clone())
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read_global(|config| config.i18n.language.clone())
    }

    /// 获取是否详细输出（带默认值）
    pub fn get_verbose() -> bool {
        match Self::read_global(|config| config.output.verbose) {
            Ok(verbose) => verbose,
            _ => Self::default_verbose(),
        }
    }

    /// 读取全局配置的通用入口
    fn read_global<T>(reader: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(reader(&config))
    }
}
