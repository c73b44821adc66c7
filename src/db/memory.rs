// src/db/memory.rs

use std::collections::HashMap;

use anyhow::Result;
use chrono::Utc;
use tracing::debug;

use crate::types::StoredStatus;

use super::{ProgressBackend, ProgressRecord};

/// Stores progress records in memory only (lost on exit).
///
/// Used by `--memory` and as the degraded fallback when the SQLite database
/// cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: HashMap<String, ProgressRecord>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressBackend for MemoryBackend {
    fn get_one(&self, id: &str) -> Result<Option<ProgressRecord>> {
        Ok(self.records.get(id).cloned())
    }

    fn get_all(&self) -> Result<Vec<ProgressRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn upsert(&mut self, id: &str, status: StoredStatus) -> Result<()> {
        self.records.insert(
            id.to_string(),
            ProgressRecord {
                id: id.to_string(),
                status,
                updated_at: Utc::now(),
            },
        );
        debug!(node = %id, status = %status, "stored progress record (memory)");
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        let removed = self.records.len();
        self.records.clear();
        debug!(removed, "cleared progress records (memory)");
        Ok(())
    }
}
