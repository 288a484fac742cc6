//! Periodic reclamation of expired scan sessions.
//!
//! Spawns from the binary entrypoint and runs until cancelled. Expired
//! sessions already read as missing from the store; the sweep only frees
//! the memory they occupy.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::store::ScanSessionStore;

/// How often expired sessions are reclaimed.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Run the expiry sweep loop until `cancel` is triggered.
pub async fn run(store: ScanSessionStore, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Scan session sweeper started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Scan session sweeper stopping");
                break;
            }
            _ = interval.tick() => {
                let pruned = store.prune_expired().await;
                if pruned > 0 {
                    tracing::info!(pruned, "Scan sessions: reclaimed expired entries");
                } else {
                    tracing::debug!("Scan sessions: nothing expired");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The first interval tick fires immediately, so even a brief run
    /// reclaims already-expired sessions.
    #[tokio::test]
    async fn sweeper_prunes_and_stops_on_cancel() {
        let store = ScanSessionStore::new();
        store.create(Duration::from_secs(0)).await;
        assert_eq!(store.count().await, 1);

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(store.clone(), cancel.clone()));

        // Give the first tick a moment to run.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(store.count().await, 0);

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper did not stop after cancellation")
            .unwrap();
    }
}
