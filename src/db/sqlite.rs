// src/db/sqlite.rs

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::types::StoredStatus;

use super::{ProgressBackend, ProgressRecord};

/// SQLite-backed progress storage.
///
/// One row per node that has ever had its status changed:
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS node_progress (
///   id TEXT PRIMARY KEY,
///   status TEXT NOT NULL DEFAULT 'pendiente',
///   updated_at TEXT NOT NULL
/// )
/// ```
///
/// Timestamps are stored as RFC 3339 strings.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("opening progress database at {:?}", path))?;
        let backend = Self { conn };
        backend.bootstrap()?;
        info!(path = ?path, "opened progress database");
        Ok(backend)
    }

    /// Open a throwaway in-memory database (used by tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("opening in-memory database")?;
        let backend = Self { conn };
        backend.bootstrap()?;
        Ok(backend)
    }

    fn bootstrap(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS node_progress (
                    id TEXT PRIMARY KEY,
                    status TEXT NOT NULL DEFAULT 'pendiente',
                    updated_at TEXT NOT NULL
                )",
            )
            .context("creating node_progress table")?;
        Ok(())
    }

    fn record_from_row(row: &Row<'_>) -> rusqlite::Result<(String, String, String)> {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    }

    fn parse_record(id: String, status: String, updated_at: String) -> Result<ProgressRecord> {
        let status = StoredStatus::from_str(&status)
            .map_err(|e| anyhow::anyhow!("record '{id}': {e}"))?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .with_context(|| format!("record '{id}': bad updated_at '{updated_at}'"))?
            .with_timezone(&Utc);
        Ok(ProgressRecord {
            id,
            status,
            updated_at,
        })
    }
}

impl ProgressBackend for SqliteBackend {
    fn get_one(&self, id: &str) -> Result<Option<ProgressRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, status, updated_at FROM node_progress WHERE id = ?1",
                params![id],
                Self::record_from_row,
            )
            .optional()
            .with_context(|| format!("reading progress record for '{id}'"))?;

        match row {
            Some((id, status, updated_at)) => Ok(Some(Self::parse_record(id, status, updated_at)?)),
            None => Ok(None),
        }
    }

    fn get_all(&self) -> Result<Vec<ProgressRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, status, updated_at FROM node_progress")
            .context("preparing progress query")?;

        let rows = stmt
            .query_map([], Self::record_from_row)
            .context("reading progress records")?;

        let mut records = Vec::new();
        for row in rows {
            let (id, status, updated_at) = row.context("reading progress row")?;
            records.push(Self::parse_record(id, status, updated_at)?);
        }
        Ok(records)
    }

    fn upsert(&mut self, id: &str, status: StoredStatus) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO node_progress (id, status, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                     status = excluded.status,
                     updated_at = excluded.updated_at",
                params![id, status.as_str(), now],
            )
            .with_context(|| format!("storing progress for '{id}'"))?;
        debug!(node = %id, status = %status, "stored progress record (sqlite)");
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM node_progress", [])
            .context("clearing progress records")?;
        info!(removed, "cleared progress records (sqlite)");
        Ok(())
    }
}
