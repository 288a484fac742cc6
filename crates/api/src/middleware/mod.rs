//! Request extractors shared by the gateway's handlers.
//!
//! - [`forward::Forwarded`] -- Captures the caller's bearer token and tenant
//!   header for forwarding to the upstream API.

pub mod forward;

pub use forward::Forwarded;
