//! Client-side account core for the car-rental web app.
//!
//! The crate owns the logic behind the signup and login screens: field
//! validation, the single stored profile record, and the role → destination
//! dispatch the router consumes. Rendering and navigation stay with the
//! caller; the store is injected, so the same handshakes run against a
//! browser profile or a plain file.

pub mod auth;
pub mod routes;
pub mod store;
