use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, TransactionBehavior};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Settings;
use crate::constants::storage::{ALL_PROJECTS_KEY, SCHEMA_VERSION, STORE_NAME};
use crate::error::{CocreateError, Result};

/// Best-effort local persistence of the whole project list.
///
/// The list lives as one JSON value under a single key. Nothing is opened
/// until the first call; every call opens its own connection, runs one
/// transaction and drops the connection again.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    db_path: PathBuf,
}

impl ProjectStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.db_path())
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Load the stored list. Any failure is logged and yields an empty list.
    pub async fn load_projects<P>(&self) -> Vec<P>
    where
        P: DeserializeOwned + Send + 'static,
    {
        match self.try_load_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                tracing::warn!("Project store load failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the stored list. Any failure is logged and swallowed.
    pub async fn save_projects<P: Serialize>(&self, projects: &[P]) {
        if let Err(e) = self.try_save_projects(projects).await {
            tracing::warn!("Project store save failed: {}", e);
        }
    }

    pub async fn try_load_projects<P>(&self) -> Result<Vec<P>>
    where
        P: DeserializeOwned + Send + 'static,
    {
        let path = self.db_path.clone();
        let raw = run_blocking(move || read_value(&path)).await?;
        match raw {
            None => Ok(Vec::new()),
            Some(json) => Ok(serde_json::from_str::<Option<Vec<P>>>(&json)?.unwrap_or_default()),
        }
    }

    pub async fn try_save_projects<P: Serialize>(&self, projects: &[P]) -> Result<()> {
        let json = serde_json::to_string(projects)?;
        let path = self.db_path.clone();
        let count = projects.len();
        run_blocking(move || write_value(&path, &json)).await?;
        tracing::debug!("Saved {} projects to {}", count, self.db_path.display());
        Ok(())
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CocreateError::store(format!("storage task failed: {e}")))?
}

fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
    )?;
    conn.busy_timeout(Duration::from_secs(5))?;
    upgrade_schema(&conn)?;
    Ok(conn)
}

/// Create the `projects` collection when the file predates it.
fn upgrade_schema(conn: &Connection) -> Result<()> {
    let version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if version > SCHEMA_VERSION {
        return Err(CocreateError::store(format!(
            "database schema version {version} is newer than supported {SCHEMA_VERSION}"
        )));
    }
    if version < SCHEMA_VERSION {
        conn.execute_batch(&format!(
            "BEGIN;
             CREATE TABLE IF NOT EXISTS {STORE_NAME} (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );
             PRAGMA user_version = {SCHEMA_VERSION};
             COMMIT;"
        ))?;
        tracing::info!("Initialized project store schema v{}", SCHEMA_VERSION);
    }
    Ok(())
}

fn read_value(path: &Path) -> Result<Option<String>> {
    let mut conn = open_db(path)?;
    conn.pragma_update(None, "query_only", true)?;

    let tx = conn.transaction_with_behavior(TransactionBehavior::Deferred)?;
    let value: Option<String> = tx
        .query_row(
            &format!("SELECT value FROM {STORE_NAME} WHERE key = ?1"),
            params![ALL_PROJECTS_KEY],
            |row| row.get(0),
        )
        .optional()?;
    tx.commit()?;
    Ok(value)
}

fn write_value(path: &Path, json: &str) -> Result<()> {
    let mut conn = open_db(path)?;

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    tx.execute(
        &format!("INSERT OR REPLACE INTO {STORE_NAME} (key, value) VALUES (?1, ?2)"),
        params![ALL_PROJECTS_KEY, json],
    )?;
    tx.commit()?;
    Ok(())
}
