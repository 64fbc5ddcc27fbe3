// ============================================================================
// LangSync - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//   - ❌ Should not contain dynamic translation generation
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Discovery related
    ("discover.scanning", "Scanning language files: {}"),
    ("discover.found", "Found {} translation domains"),
    (
        "discover.empty",
        "No language files found under the language directory",
    ),
    // View scanner related
    ("scan.scanning", "Scanning views: {}"),
    ("scan.found_keys", "Found {} keys across {} domains"),
    // Sync passes
    (
        "sync.reading_views",
        "Reading translation keys from files...",
    ),
    (
        "sync.removing_excess",
        "Removing keys missing from project files...",
    ),
    ("sync.between_languages", "Synchronizing language files..."),
    ("sync.key_added", "{} was added."),
    ("sync.key_removed", "{} was removed."),
    ("sync.done", "Done!"),
    ("sync.nothing_to_do", "Everything is already in sync."),
    // Sync summary
    ("summary.title", "Sync Summary"),
    ("summary.added", "Added keys: {}"),
    ("summary.removed", "Removed keys: {}"),
    ("summary.backfilled", "Backfilled keys: {}"),
    ("summary.files_written", "Files written: {}"),
    // Init command
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    (
        "init.use_force_hint",
        "Use --force to overwrite the existing file",
    ),
    ("init.config_created", "Configuration file created: {}"),
    (
        "init.next_steps",
        "Adjust [paths] in langsync.toml, then run: langsync sync",
    ),
    ("init.create_failed", "Failed to create configuration: {}"),
    // Errors
    ("error.lang_root_missing", "Language directory not found: {}"),
    ("error.view_root_missing", "Views directory not found: {}"),
    ("error.sync_failed", "Sync aborted: {}"),
];
