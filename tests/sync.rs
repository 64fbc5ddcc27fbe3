// ============================================================================
// LangSync - 端到端同步测试
// ============================================================================
//
// 文件: tests/sync.rs
// 职责: 视图扫描 → 文件发现 → 三遍同步的端到端验证
//
// ============================================================================

use std::path::PathBuf;

use langsync::{FileDiscovery, Reconciler, SyncStats, TableCodec, TranslationTable, ViewScanner};
use tempfile::{tempdir, TempDir};

/// 临时项目目录：views/ 下是模板，lang/ 下是语言文件
struct Project {
    root: TempDir,
}

impl Project {
    fn new() -> Self {
        let root = tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("views")).unwrap();
        std::fs::create_dir_all(root.path().join("lang")).unwrap();
        Self { root }
    }

    fn lang_root(&self) -> PathBuf {
        self.root.path().join("lang")
    }

    fn view_root(&self) -> PathBuf {
        self.root.path().join("views")
    }

    fn write_view(&self, name: &str, content: &str) {
        std::fs::write(self.view_root().join(name), content).unwrap();
    }

    fn write_table(&self, language: &str, domain: &str, json: &str) {
        let path = self.lang_root().join(language).join(format!("{}.json", domain));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, json).unwrap();
    }

    fn table(&self, language: &str, domain: &str) -> TranslationTable {
        let path = self.lang_root().join(language).join(format!("{}.json", domain));
        TableCodec::load(&path).unwrap()
    }

    fn table_path(&self, language: &str, domain: &str) -> PathBuf {
        self.lang_root().join(language).join(format!("{}.json", domain))
    }

    /// 跑一次完整同步
    fn sync(&self, generate: bool, delete: bool) -> SyncStats {
        let files = FileDiscovery::new(self.lang_root()).discover().unwrap();
        let source_keys = ViewScanner::new(self.view_root()).scan().unwrap();
        Reconciler::new(self.lang_root(), files, source_keys)
            .with_generate(generate)
            .with_delete(delete)
            .run()
            .unwrap()
    }
}

fn flat_keys(table: &TranslationTable) -> Vec<String> {
    table.flat_keys()
}

#[test]
fn sync_scenario_fills_both_languages_from_views() {
    let project = Project::new();
    project.write_view(
        "login.php",
        r#"<p><?php echo trans('auth.failed'); ?></p>
           <p><?php echo trans('auth.throttle'); ?></p>"#,
    );
    project.write_table("en", "auth", r#"{"failed": "Failed."}"#);
    project.write_table("fr", "auth", r#"{}"#);

    let stats = project.sync(false, false);

    let en = project.table("en", "auth");
    let fr = project.table("fr", "auth");

    // 英文表保留原值并补上 throttle；法文表补上两个键
    assert_eq!(en.get("failed"), Some("Failed."));
    assert_eq!(en.get("throttle"), Some(""));
    assert_eq!(fr.get("failed"), Some(""));
    assert_eq!(fr.get("throttle"), Some(""));

    // 两侧都已补齐，交叉补齐无事可做
    assert_eq!(stats.added, 3);
    assert_eq!(stats.backfilled, 0);
}

#[test]
fn second_run_changes_nothing() {
    let project = Project::new();
    project.write_view("page.php", r#"@lang('messages.welcome')"#);
    project.write_table("en", "messages", r#"{"farewell": "Bye"}"#);
    project.write_table("de", "messages", r#"{}"#);

    project.sync(true, true);
    let again = project.sync(true, true);

    assert!(again.is_noop());
    assert_eq!(again.files_written, 0);
}

#[test]
fn delete_makes_tables_match_views_exactly() {
    let project = Project::new();
    project.write_view("page.php", r#"trans('auth.failed')"#);
    project.write_table(
        "en",
        "auth",
        r#"{"failed": "Failed.", "stale": "Old", "old": {"nested": "x"}}"#,
    );

    project.sync(false, true);

    assert_eq!(flat_keys(&project.table("en", "auth")), vec!["failed"]);
}

#[test]
fn backfill_carries_keys_to_languages_missing_them() {
    let project = Project::new();
    project.write_table("en", "auth", r#"{"failed": "Failed."}"#);
    project.write_table("fr", "auth", r#"{}"#);
    project.write_table("fr", "validation", r#"{"required": "Requis"}"#);

    project.sync(false, false);

    // fr 从 en 补到 failed；en 缺少整个 validation 文件，同步时新建
    assert_eq!(project.table("fr", "auth").get("failed"), Some(""));
    assert!(project.table_path("en", "validation").exists());
    assert_eq!(project.table("en", "validation").get("required"), Some(""));
}

#[test]
fn backfill_preserves_nested_branches_on_shape_conflict() {
    let project = Project::new();
    // 同一路径在 en 侧是叶子、在 fr 侧是分支
    project.write_table("en", "auth", r#"{"a": {"b": "Leaf"}}"#);
    project.write_table("fr", "auth", r#"{"a": {"b": {"c": "x"}}}"#);

    project.sync(false, false);

    // fr 的嵌套结构不被交叉补齐覆盖
    assert_eq!(project.table("fr", "auth").get("a.b.c"), Some("x"));

    let again = project.sync(false, false);
    assert!(again.is_noop());
}

#[test]
fn generate_produces_title_cased_placeholders() {
    let project = Project::new();
    project.write_view("page.php", r#"trans('auth.login_failed')"#);
    project.write_table("en", "auth", r#"{}"#);

    project.sync(true, false);
    assert_eq!(
        project.table("en", "auth").get("login_failed"),
        Some("Login Failed")
    );
}

#[test]
fn structural_nesting_is_not_treated_as_missing() {
    let project = Project::new();
    project.write_view("page.php", r#"trans('auth.nested.label')"#);
    project.write_table("en", "auth", r#"{"nested": {"label": "Label"}}"#);

    let stats = project.sync(false, false);

    assert!(stats.is_noop());
    assert_eq!(project.table("en", "auth").get("nested.label"), Some("Label"));
}

#[test]
fn written_files_stay_loadable_and_sorted() {
    let project = Project::new();
    project.write_view(
        "page.php",
        r#"trans('auth.zulu') trans('auth.alpha') trans('auth.mike')"#,
    );
    project.write_table("en", "auth", r#"{}"#);

    project.sync(false, false);

    let raw = std::fs::read_to_string(project.table_path("en", "auth")).unwrap();
    let alpha = raw.find("alpha").unwrap();
    let mike = raw.find("mike").unwrap();
    let zulu = raw.find("zulu").unwrap();
    assert!(alpha < mike && mike < zulu);

    assert_eq!(
        flat_keys(&project.table("en", "auth")),
        vec!["alpha", "mike", "zulu"]
    );
}

#[test]
fn unreferenced_domains_are_left_alone_without_delete() {
    let project = Project::new();
    project.write_view("page.php", r#"trans('auth.failed')"#);
    project.write_table("en", "auth", r#"{"failed": "Failed."}"#);
    project.write_table("en", "admin", r#"{"panel": "Panel"}"#);

    project.sync(false, false);

    assert_eq!(project.table("en", "admin").get("panel"), Some("Panel"));
}
