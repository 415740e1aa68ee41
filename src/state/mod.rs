//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the token/user pair; `auth` is the immutable snapshot the
//! reactive UI reads.

pub mod auth;
pub mod session;
