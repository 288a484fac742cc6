//! Shared domain building blocks for the Rentora gateway.
//!
//! The gateway owns no persistent schema -- rental entities live in the
//! upstream API and flow through as raw JSON. What lives here is the small
//! amount of domain logic the gateway does own: the error taxonomy, JSON
//! key normalization for view models, the scan-session model, and request
//! validation helpers.

pub mod error;
pub mod normalize;
pub mod scan;
pub mod types;
pub mod validate;
