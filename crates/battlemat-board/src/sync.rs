//! Best-effort position persistence.
//!
//! Commits are applied to the board before they reach the store; the
//! syncer writes them in the background and never rolls a token back. A
//! failed write is logged and published as a store event so the UI can
//! surface it.

use std::sync::Arc;

use battlemat_core::{emit, AppEvent, ErrorEvent, StoreEvent};
use battlemat_store::EntityStore;

use crate::drag::PositionCommit;

/// Fire-and-forget writer for position commits.
#[derive(Clone)]
pub struct PositionSyncer {
    store: Arc<dyn EntityStore>,
}

impl PositionSyncer {
    /// Creates a syncer over a store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Spawns a background write for a commit.
    ///
    /// Returns the task handle so callers that need to observe completion,
    /// like tests or a graceful shutdown, can await it.
    pub fn commit(&self, commit: PositionCommit) -> tokio::task::JoinHandle<()> {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            match store
                .persist_position(commit.token_id, commit.to.x, commit.to.y)
                .await
            {
                Ok(()) => {
                    tracing::debug!(entity_id = commit.token_id, "position persisted");
                    let _ = emit!(AppEvent::Store(StoreEvent::PositionPersisted {
                        entity_id: commit.token_id,
                    }));
                }
                Err(e) => {
                    // Local state stands; the move is not rolled back
                    tracing::warn!(
                        entity_id = commit.token_id,
                        error = %e,
                        "position persist failed"
                    );
                    let _ = emit!(AppEvent::Store(StoreEvent::PersistFailed {
                        entity_id: commit.token_id,
                        error: e.to_string(),
                    }));
                    let _ = emit!(AppEvent::Error(ErrorEvent::Warning {
                        message: format!(
                            "position of token {} not saved: {}",
                            commit.token_id, e
                        ),
                    }));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlemat_core::GridPoint;
    use battlemat_store::MemoryStore;
    use serde_json::json;

    fn store_with_entity() -> Arc<MemoryStore> {
        let record = serde_json::from_value(json!({
            "id_entity": 1, "id_user": 1, "name": "fighter",
            "positionx": 2, "positiony": 2,
        }))
        .unwrap();
        Arc::new(MemoryStore::with_rows(vec![record]))
    }

    fn commit() -> PositionCommit {
        PositionCommit {
            token_id: 1,
            from: GridPoint::new(2, 2),
            to: GridPoint::new(4, 1),
        }
    }

    #[tokio::test]
    async fn test_commit_reaches_store() {
        let store = store_with_entity();
        let syncer = PositionSyncer::new(store.clone());
        syncer.commit(commit()).await.unwrap();
        assert_eq!(store.row(1).unwrap().position(), (4, 1));
    }

    #[tokio::test]
    async fn test_failed_commit_does_not_panic() {
        let store = store_with_entity();
        store.set_fail_writes(true);
        let syncer = PositionSyncer::new(store.clone());
        syncer.commit(commit()).await.unwrap();
        // The stored row keeps its old position; no rollback is attempted
        assert_eq!(store.row(1).unwrap().position(), (2, 2));
    }

    #[tokio::test]
    async fn test_failed_commit_publishes_diagnostics() {
        let store = store_with_entity();
        store.set_fail_writes(true);
        let syncer = PositionSyncer::new(store.clone());

        let mut receiver = battlemat_core::event_bus().receiver();
        syncer.commit(commit()).await.unwrap();

        // The global bus is shared, so scan for this entity's events
        let mut saw_store_failure = false;
        let mut saw_warning = false;
        while let Ok(event) = receiver.try_recv() {
            match event {
                AppEvent::Store(StoreEvent::PersistFailed { entity_id: 1, .. }) => {
                    saw_store_failure = true;
                }
                AppEvent::Error(ErrorEvent::Warning { message }) if message.contains("token 1") => {
                    saw_warning = true;
                }
                _ => {}
            }
        }
        assert!(saw_store_failure);
        assert!(saw_warning);
    }
}
