//! History Store for PlantLens.
//!
//! A bounded, newest-first sequence of identified plants, persisted as a
//! single JSON file so it survives process restart. Load and persist
//! failures are recovered locally and logged, never surfaced to the user.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::platform;
use crate::types::errors::HistoryError;
use crate::types::plant::{PlantProfile, PlantRecord};

/// Maximum number of records retained. Appending beyond this evicts the
/// oldest records unconditionally.
pub const HISTORY_CAPACITY: usize = 20;

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    fn append(&mut self, profile: PlantProfile) -> &PlantRecord;
    fn records(&self) -> &[PlantRecord];
    fn get(&self, id: &str) -> Option<&PlantRecord>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn capacity(&self) -> usize;
    fn clear(&mut self);
}

/// History store persisting the record sequence as JSON on disk.
pub struct HistoryStore {
    history_path: String,
    records: Vec<PlantRecord>,
    last_timestamp: i64,
}

impl HistoryStore {
    /// Creates a new HistoryStore and loads any persisted history.
    ///
    /// If `path_override` is `Some`, uses that path for the history file.
    /// Otherwise, uses the platform-specific data directory with `history.json`.
    /// Absent or unparseable persisted data initializes an empty store; the
    /// failure is logged and not surfaced.
    pub fn new(path_override: Option<String>) -> Self {
        let history_path = match path_override {
            Some(p) => p,
            None => {
                let data_dir = platform::get_data_dir();
                data_dir.join("history.json").to_string_lossy().to_string()
            }
        };

        let mut store = Self {
            history_path,
            records: Vec::new(),
            last_timestamp: 0,
        };

        if let Err(e) = store.load() {
            tracing::warn!("failed to load plant history, starting empty: {}", e);
            store.records.clear();
        }
        store
    }

    /// Returns the path to the history file.
    pub fn history_path(&self) -> &str {
        &self.history_path
    }

    /// Loads the persisted record sequence from disk.
    ///
    /// A missing file is not an error: the store stays empty.
    pub fn load(&mut self) -> Result<(), HistoryError> {
        let path = Path::new(&self.history_path);

        if !path.exists() {
            self.records = Vec::new();
            return Ok(());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| HistoryError::IoError(format!("Failed to read history file: {}", e)))?;

        let records: Vec<PlantRecord> = serde_json::from_str(&content).map_err(|e| {
            HistoryError::SerializationError(format!("Failed to parse history file: {}", e))
        })?;

        self.last_timestamp = records.first().map(|r| r.timestamp).unwrap_or(0);
        self.records = records;
        Ok(())
    }

    /// Serializes the full current sequence back to the history file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn persist(&self) -> Result<(), HistoryError> {
        let path = Path::new(&self.history_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HistoryError::IoError(format!("Failed to create data directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.records).map_err(|e| {
            HistoryError::SerializationError(format!("Failed to serialize history: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| HistoryError::IoError(format!("Failed to write history file: {}", e)))?;

        Ok(())
    }

    /// Current wall clock in milliseconds, clamped so consecutive appends
    /// never observe a decreasing timestamp under clock adjustment.
    fn next_timestamp(&mut self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        self.last_timestamp = now.max(self.last_timestamp);
        self.last_timestamp
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HistoryStoreTrait for HistoryStore {
    /// Assigns an id and capture timestamp, prepends the record, evicts the
    /// tail beyond capacity, and persists best-effort.
    fn append(&mut self, profile: PlantProfile) -> &PlantRecord {
        let record = PlantRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: self.next_timestamp(),
            profile,
        };

        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAPACITY);

        if let Err(e) = self.persist() {
            tracing::warn!("failed to persist plant history: {}", e);
        }

        &self.records[0]
    }

    /// Records in newest-first order.
    fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    fn get(&self, id: &str) -> Option<&PlantRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }

    /// Total store reset, persisted best-effort.
    fn clear(&mut self) {
        self.records.clear();
        if let Err(e) = self.persist() {
            tracing::warn!("failed to persist cleared history: {}", e);
        }
    }
}
