//! Networking modules for the bug-tracker backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs one HTTP exchange, `auth` owns the `/auth/*` calls,
//! `request` wraps every other call with the bearer token and error
//! normalization, `bugs` is the typed bug API on top of it, and `types`
//! defines the wire schema.

pub mod auth;
pub mod bugs;
pub mod request;
pub mod transport;
pub mod types;
