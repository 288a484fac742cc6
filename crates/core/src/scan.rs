//! Scan-session domain model.
//!
//! A scan session is a short-lived handoff slot: the desktop client creates
//! one and shows its id as a QR code, the phone scans a document and submits
//! the extracted data against that id, and the desktop polls until the data
//! arrives. Sessions hold whatever JSON the scanning client produced -- the
//! gateway owns no document schema.
//!
//! The async store and the expiry sweep live in the api crate; this module
//! is the pure state machine so transitions stay unit-testable.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Lifecycle state of a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// Created, waiting for the phone to submit data.
    Pending,
    /// Data has been submitted and can be collected by the poller.
    Completed,
}

/// Data submitted by the scanning client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Opaque scanned payload (extracted document fields, client-defined).
    pub data: Value,
    pub submitted_at: Timestamp,
}

/// A single scan handoff session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSession {
    pub id: Uuid,
    pub status: ScanStatus,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScanResult>,
}

impl ScanSession {
    /// Create a new pending session expiring `ttl` from now.
    pub fn new(ttl: std::time::Duration) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            status: ScanStatus::Pending,
            created_at: now,
            expires_at: now + chrono::Duration::seconds(ttl.as_secs() as i64),
            result: None,
        }
    }

    /// Whether the session has expired as of `now`.
    ///
    /// Expired sessions must read as missing everywhere, even before the
    /// periodic sweep reclaims them.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }

    /// Record the scanned payload, moving the session to `Completed`.
    ///
    /// Returns `Conflict` if data was already submitted for this session.
    pub fn submit(&mut self, data: Value, now: Timestamp) -> Result<(), CoreError> {
        if self.status == ScanStatus::Completed {
            return Err(CoreError::Conflict(
                "Scan data was already submitted for this session".into(),
            ));
        }

        self.status = ScanStatus::Completed;
        self.result = Some(ScanResult {
            data,
            submitted_at: now,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn new_session_is_pending_with_future_expiry() {
        let session = ScanSession::new(Duration::from_secs(600));
        assert_eq!(session.status, ScanStatus::Pending);
        assert!(session.result.is_none());
        assert!(session.expires_at > session.created_at);
        assert!(!session.is_expired(chrono::Utc::now()));
    }

    #[test]
    fn expiry_boundary_counts_as_expired() {
        let session = ScanSession::new(Duration::from_secs(60));
        assert!(session.is_expired(session.expires_at));
        assert!(session.is_expired(session.expires_at + chrono::Duration::seconds(1)));
        assert!(!session.is_expired(session.expires_at - chrono::Duration::seconds(1)));
    }

    #[test]
    fn submit_completes_and_stores_payload() {
        let mut session = ScanSession::new(Duration::from_secs(600));
        let now = chrono::Utc::now();

        session
            .submit(json!({ "licenseNumber": "D1234567" }), now)
            .unwrap();

        assert_eq!(session.status, ScanStatus::Completed);
        let result = session.result.as_ref().unwrap();
        assert_eq!(result.data["licenseNumber"], "D1234567");
        assert_eq!(result.submitted_at, now);
    }

    #[test]
    fn double_submit_is_a_conflict() {
        let mut session = ScanSession::new(Duration::from_secs(600));
        let now = chrono::Utc::now();

        session.submit(json!({ "a": 1 }), now).unwrap();
        let err = session.submit(json!({ "b": 2 }), now).unwrap_err();

        assert!(matches!(err, CoreError::Conflict(_)));
        // The original payload is untouched.
        assert_eq!(session.result.as_ref().unwrap().data["a"], 1);
    }

    #[test]
    fn status_serializes_lowercase() {
        let session = ScanSession::new(Duration::from_secs(60));
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["status"], "pending");
        assert!(json.get("result").is_none());
    }
}
