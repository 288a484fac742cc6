//! In-memory scan-session handoff state.
//!
//! The pure session state machine lives in `rentora_core::scan`; this module
//! adds the shared async store the handlers use and the background sweeper
//! that reclaims expired sessions.

pub mod store;
pub mod sweeper;

pub use store::ScanSessionStore;
