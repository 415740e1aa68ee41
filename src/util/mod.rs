//! Browser seams and route protection.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` and `navigate` wrap `localStorage` and `window.location` behind
//! traits with in-memory stand-ins; `guard` decides what a protected route
//! renders for the current session. `dialog` is the delete confirmation.

pub mod dialog;
pub mod guard;
pub mod navigate;
pub mod storage;
