use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use chrono::Utc;

use trailmap::db::{ProgressBackend, ProgressRecord};
use trailmap::types::StoredStatus;

/// Shared view into a [`RecordingBackend`], usable after the backend itself
/// has been moved into the store's persistence worker.
#[derive(Clone, Default)]
pub struct BackendProbe {
    inner: Arc<Mutex<ProbeState>>,
}

#[derive(Default)]
struct ProbeState {
    records: HashMap<String, ProgressRecord>,
    upserts: Vec<(String, StoredStatus)>,
    delete_alls: usize,
}

impl BackendProbe {
    /// Preseed a record, as if a previous session had written it.
    pub fn seed(&self, id: &str, status: StoredStatus) {
        let mut state = self.inner.lock().unwrap();
        state.records.insert(
            id.to_string(),
            ProgressRecord {
                id: id.to_string(),
                status,
                updated_at: Utc::now(),
            },
        );
    }

    /// Every `(id, status)` upsert observed, in call order.
    pub fn upserts(&self) -> Vec<(String, StoredStatus)> {
        self.inner.lock().unwrap().upserts.clone()
    }

    /// Number of `delete_all` calls observed.
    pub fn delete_alls(&self) -> usize {
        self.inner.lock().unwrap().delete_alls
    }

    /// The currently stored status for `id`, if any.
    pub fn stored_status(&self, id: &str) -> Option<StoredStatus> {
        self.inner
            .lock()
            .unwrap()
            .records
            .get(id)
            .map(|r| r.status)
    }

    pub fn record_count(&self) -> usize {
        self.inner.lock().unwrap().records.len()
    }
}

/// A fake backend that:
/// - serves and stores records in memory
/// - records every write so tests can assert on persistence traffic.
#[derive(Default)]
pub struct RecordingBackend {
    probe: BackendProbe,
}

impl RecordingBackend {
    /// Build a backend plus a probe for observing it from the test body.
    pub fn with_probe() -> (Self, BackendProbe) {
        let probe = BackendProbe::default();
        (
            Self {
                probe: probe.clone(),
            },
            probe,
        )
    }
}

impl ProgressBackend for RecordingBackend {
    fn get_one(&self, id: &str) -> Result<Option<ProgressRecord>> {
        Ok(self.probe.inner.lock().unwrap().records.get(id).cloned())
    }

    fn get_all(&self) -> Result<Vec<ProgressRecord>> {
        Ok(self
            .probe
            .inner
            .lock()
            .unwrap()
            .records
            .values()
            .cloned()
            .collect())
    }

    fn upsert(&mut self, id: &str, status: StoredStatus) -> Result<()> {
        let mut state = self.probe.inner.lock().unwrap();
        state.upserts.push((id.to_string(), status));
        state.records.insert(
            id.to_string(),
            ProgressRecord {
                id: id.to_string(),
                status,
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        let mut state = self.probe.inner.lock().unwrap();
        state.delete_alls += 1;
        state.records.clear();
        Ok(())
    }
}

/// A backend where every operation fails, simulating an unreachable
/// database.
#[derive(Debug, Default)]
pub struct FailingBackend;

impl ProgressBackend for FailingBackend {
    fn get_one(&self, _id: &str) -> Result<Option<ProgressRecord>> {
        Err(anyhow!("backend unavailable"))
    }

    fn get_all(&self) -> Result<Vec<ProgressRecord>> {
        Err(anyhow!("backend unavailable"))
    }

    fn upsert(&mut self, _id: &str, _status: StoredStatus) -> Result<()> {
        Err(anyhow!("backend unavailable"))
    }

    fn delete_all(&mut self) -> Result<()> {
        Err(anyhow!("backend unavailable"))
    }
}
