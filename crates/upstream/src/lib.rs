//! HTTP clients for the external services the gateway fronts.
//!
//! Three collaborators live behind this crate:
//!
//! - the rental API (source of truth for all domain data) via
//!   [`api::UpstreamClient`],
//! - Stripe Terminal via [`stripe::StripeClient`],
//! - the violations-lookup service via [`violations::ViolationsClient`].
//!
//! All three share the gateway's relay contract (see [`relay`]): whatever
//! HTTP response the remote side produced is handed back as data, and only
//! transport-level failures surface as errors.

pub mod api;
pub mod relay;
pub mod stripe;
pub mod violations;

pub use api::{ForwardedAuth, UpstreamClient, TENANT_HEADER};
pub use relay::{Relayed, UpstreamError};
pub use stripe::StripeClient;
pub use violations::ViolationsClient;
