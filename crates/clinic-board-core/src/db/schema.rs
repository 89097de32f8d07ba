//! SQLite schema definition.

/// Complete database schema for the dashboard store.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Key-value store (the app's "local storage")
-- ============================================================================

CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
