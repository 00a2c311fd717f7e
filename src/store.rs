use crate::clock::Clock;
use crate::models::CompletionRecord;
use crate::storage::{KeyValueStore, StorageError};
use std::{collections::BTreeSet, sync::Arc};
use tracing::{debug, info, warn};

pub const DEFAULT_STORAGE_KEY: &str = "nativeProgress";

/// Today's completion set, persisted under one key and reset lazily when the
/// stored date is not today.
pub struct ProgressStore {
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    key: String,
}

impl ProgressStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_key(storage, clock, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            clock,
            key: key.into(),
        }
    }

    /// Returns today's set. A missing, malformed, or stale record yields the
    /// empty set, and an empty record stamped today is written back.
    pub fn load(&self) -> BTreeSet<String> {
        self.load_day().1
    }

    /// Like `load`, but also returns the date the record was checked against.
    /// Pass that date to `save_for` so one operation never straddles midnight.
    pub fn load_day(&self) -> (String, BTreeSet<String>) {
        let today = self.clock.today();

        let completed = match self.read_record() {
            Some(record) if record.date == today => record.completed(),
            stale => {
                match stale {
                    Some(record) => info!(from = %record.date, to = %today, "daily reset"),
                    None => debug!(key = %self.key, "no progress record, starting fresh"),
                }
                let empty = BTreeSet::new();
                if let Err(err) = self.write_record(&CompletionRecord::new(&today, &empty)) {
                    warn!("failed to persist rolled-over progress: {err}");
                }
                empty
            }
        };
        (today, completed)
    }

    /// `completed` with `id` flipped. Does not persist.
    pub fn toggle(id: &str, completed: &BTreeSet<String>) -> BTreeSet<String> {
        let mut next = completed.clone();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        next
    }

    /// Overwrites the stored record with `completed`, stamped today.
    pub fn save(&self, completed: &BTreeSet<String>) -> Result<(), StorageError> {
        self.save_for(&self.clock.today(), completed)
    }

    /// Overwrites the stored record with `completed`, stamped `date`. If the
    /// day has moved on since `date`, the next load resets the record.
    pub fn save_for(&self, date: &str, completed: &BTreeSet<String>) -> Result<(), StorageError> {
        let record = CompletionRecord::new(date, completed);
        self.write_record(&record)?;
        debug!(date = %record.date, steps = record.steps.len(), "saved progress");
        Ok(())
    }

    fn read_record(&self) -> Option<CompletionRecord> {
        let raw = self.storage.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(key = %self.key, "discarding malformed progress record: {err}");
                None
            }
        }
    }

    fn write_record(&self, record: &CompletionRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_string(record)?;
        self.storage.set(&self.key, &payload)
    }
}
