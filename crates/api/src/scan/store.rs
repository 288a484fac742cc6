//! Shared store of live scan sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rentora_core::error::CoreError;
use rentora_core::scan::ScanSession;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory, TTL-pruned map of scan sessions.
///
/// Cheap to clone; all clones share the same map. Expired sessions read as
/// missing everywhere, even before the periodic sweep reclaims them.
#[derive(Clone, Default)]
pub struct ScanSessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ScanSession>>>,
}

impl ScanSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a new pending session expiring `ttl` from now.
    pub async fn create(&self, ttl: Duration) -> ScanSession {
        let session = ScanSession::new(ttl);
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    /// Fetch a session by id. Expired sessions read as missing.
    pub async fn get(&self, id: Uuid) -> Option<ScanSession> {
        let now = chrono::Utc::now();
        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|s| !s.is_expired(now))
            .cloned()
    }

    /// Submit scanned data against a pending session.
    ///
    /// Missing or expired sessions are `NotFound`; a session that already
    /// holds data is a `Conflict`.
    pub async fn submit(&self, id: Uuid, data: Value) -> Result<ScanSession, CoreError> {
        let now = chrono::Utc::now();
        let mut sessions = self.sessions.write().await;

        let session = sessions
            .get_mut(&id)
            .filter(|s| !s.is_expired(now))
            .ok_or(CoreError::NotFound {
                entity: "ScanSession",
                id,
            })?;

        session.submit(data, now)?;
        Ok(session.clone())
    }

    /// Discard a session. Returns `true` when a live session was removed;
    /// an expired entry is dropped from the map but reports as missing.
    pub async fn remove(&self, id: Uuid) -> bool {
        let now = chrono::Utc::now();
        self.sessions
            .write()
            .await
            .remove(&id)
            .is_some_and(|s| !s.is_expired(now))
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let now = chrono::Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    /// Number of entries currently held, including expired ones the sweeper
    /// has not reclaimed yet.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
