use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::paths;

/// Storage key holding the session identifier.
pub const SESSION_KEY: &str = "oracle_session";

/// Creates a fresh `session-<unix millis>` identifier.
pub fn new_session_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("session-{millis}")
}

/// Key/value store backed by `SQLite`.
///
/// The default store lives in the state directory and survives restarts; an
/// in-memory store lives only as long as the process.
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Opens the store at `$XDG_STATE_HOME/oracle/session.db`.
    pub fn open_default() -> Result<Self> {
        let state_dir = paths::state_dir()?;

        std::fs::create_dir_all(&state_dir).with_context(|| {
            format!("Failed to create state directory: {}", state_dir.display())
        })?;

        Self::open(&state_dir.join("session.db"))
    }

    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open session database: {}", db_path.display()))?;
        Self::init(conn)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory session store")?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS session_storage (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create session_storage table")?;

        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM session_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read '{key}' from session store"))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO session_storage (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .with_context(|| format!("Failed to write '{key}' to session store"))?;
        Ok(())
    }

    /// Returns the stored identifier, creating and storing one if absent.
    pub fn get_or_create(&self, key: &str) -> Result<String> {
        if let Some(existing) = self.get(key)? {
            return Ok(existing);
        }

        let session_id = new_session_id();
        self.set(key, &session_id)?;
        tracing::debug!(%session_id, "created new session");
        Ok(session_id)
    }

    /// Forgets the stored identifier. Returns whether one existed.
    pub fn reset(&self, key: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM session_storage WHERE key = ?1", [key])
            .with_context(|| format!("Failed to remove '{key}' from session store"))?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_session_id_format() {
        let id = new_session_id();
        let millis = id.strip_prefix("session-").unwrap();
        assert!(millis.parse::<u128>().unwrap() > 0);
    }

    #[test]
    fn test_get_missing_key() {
        let store = SessionStore::in_memory().unwrap();
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_get_or_create_is_stable() {
        let store = SessionStore::in_memory().unwrap();

        let first = store.get_or_create(SESSION_KEY).unwrap();
        let second = store.get_or_create(SESSION_KEY).unwrap();

        assert!(first.starts_with("session-"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_or_create_reuses_existing_value() {
        let store = SessionStore::in_memory().unwrap();
        store.set(SESSION_KEY, "session-from-earlier").unwrap();

        assert_eq!(
            store.get_or_create(SESSION_KEY).unwrap(),
            "session-from-earlier"
        );
    }

    #[test]
    fn test_reset_forgets_session() {
        let store = SessionStore::in_memory().unwrap();
        store.set(SESSION_KEY, "session-old").unwrap();

        assert!(store.reset(SESSION_KEY).unwrap());
        assert!(store.get(SESSION_KEY).unwrap().is_none());
        assert!(!store.reset(SESSION_KEY).unwrap());
    }

    #[test]
    fn test_session_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("session.db");

        let first = SessionStore::open(&db_path)
            .unwrap()
            .get_or_create(SESSION_KEY)
            .unwrap();
        let second = SessionStore::open(&db_path)
            .unwrap()
            .get_or_create(SESSION_KEY)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_in_memory_stores_are_independent() {
        let a = SessionStore::in_memory().unwrap();
        let b = SessionStore::in_memory().unwrap();
        a.set(SESSION_KEY, "session-a").unwrap();

        assert!(b.get(SESSION_KEY).unwrap().is_none());
    }
}
