//! Key-value operations.

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Database, DbError, DbResult};

impl Database {
    /// Read a raw value.
    pub fn get_value(&self, key: &str) -> DbResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    /// Write a raw value, replacing any previous one.
    pub fn set_value(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Remove a key. Returns whether it existed.
    pub fn remove_value(&self, key: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?", [key])?;
        Ok(rows_affected > 0)
    }

    /// Read a JSON-encoded value.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> DbResult<Option<T>> {
        self.get_value(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|source| DbError::Json {
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Write a value as JSON.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> DbResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| DbError::Json {
            key: key.to_string(),
            source,
        })?;
        self.set_value(key, &raw)
    }
}
