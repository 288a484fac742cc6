//! Request handlers for the gateway surface.
//!
//! Most submodules are relay handlers: they forward the request to the
//! upstream rental API (or Stripe, or the violations service) and map the
//! captured response straight onto the outgoing one. `scan` and `translate`
//! are the two locally-owned surfaces.

pub mod admin;
pub mod companies;
pub mod customers;
pub mod payments;
pub mod reservations;
pub mod scan;
pub mod terminal;
pub mod translate;
pub mod vehicles;
pub mod violations;
