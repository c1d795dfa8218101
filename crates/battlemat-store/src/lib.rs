//! # Battlemat Store
//!
//! Persistence boundary for battlemat. The board never talks to a concrete
//! backend; it sees the [`EntityStore`] trait, which exposes exactly the two
//! operations the grid core needs: fetch the entities of a user and persist
//! one entity's position.
//!
//! Two implementations are provided: an in-memory store for tests and a
//! JSON-file store for standalone sessions.

mod record;

pub use record::EntityRecord;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use battlemat_core::{Result, StoreError};

/// Abstract entity store.
///
/// Position writes are best-effort: callers apply the new position locally
/// before the write resolves and never roll back on failure.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Fetch all entities owned by a user.
    async fn fetch_entities(&self, user_id: i64) -> Result<Vec<EntityRecord>>;

    /// Persist an entity's grid position.
    async fn persist_position(&self, entity_id: i64, x: i32, y: i32) -> Result<()>;
}

/// In-memory store, primarily for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<i64, EntityRecord>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with rows.
    pub fn with_rows(rows: Vec<EntityRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.rows.write();
            for row in rows {
                map.insert(row.id_entity, row);
            }
        }
        store
    }

    /// Makes every subsequent position write fail. Test hook.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Reads back a row by entity id.
    pub fn row(&self, entity_id: i64) -> Option<EntityRecord> {
        self.rows.read().get(&entity_id).cloned()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn fetch_entities(&self, user_id: i64) -> Result<Vec<EntityRecord>> {
        Ok(self
            .rows
            .read()
            .values()
            .filter(|r| r.id_user == user_id)
            .cloned()
            .collect())
    }

    async fn persist_position(&self, entity_id: i64, x: i32, y: i32) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Persist {
                entity_id,
                reason: "write disabled".to_string(),
            }
            .into());
        }
        let mut rows = self.rows.write();
        let row = rows.get_mut(&entity_id).ok_or(StoreError::Persist {
            entity_id,
            reason: "no such entity".to_string(),
        })?;
        row.positionx = Some(serde_json::json!(x));
        row.positiony = Some(serde_json::json!(y));
        Ok(())
    }
}

/// Entity store backed by a single JSON file holding an array of rows.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given file. The file is created on first
    /// write if missing; a missing file reads as an empty table.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_rows(&self) -> Result<Vec<EntityRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|e| {
            StoreError::Data {
                reason: format!("{}: {}", self.path.display(), e),
            }
            .into()
        })
    }

    fn write_rows(&self, rows: &[EntityRecord]) -> Result<()> {
        let data = serde_json::to_string_pretty(rows).map_err(|e| StoreError::Data {
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, data)?;
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "entity file written");
        Ok(())
    }
}

#[async_trait]
impl EntityStore for JsonFileStore {
    async fn fetch_entities(&self, user_id: i64) -> Result<Vec<EntityRecord>> {
        let rows = self.read_rows()?;
        Ok(rows.into_iter().filter(|r| r.id_user == user_id).collect())
    }

    async fn persist_position(&self, entity_id: i64, x: i32, y: i32) -> Result<()> {
        let mut rows = self.read_rows()?;
        let row = rows
            .iter_mut()
            .find(|r| r.id_entity == entity_id)
            .ok_or(StoreError::Persist {
                entity_id,
                reason: "no such entity".to_string(),
            })?;
        row.positionx = Some(serde_json::json!(x));
        row.positiony = Some(serde_json::json!(y));
        self.write_rows(&rows)
    }
}
