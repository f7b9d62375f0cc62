//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Cart and favorites are persisted to browser storage on every change; auth
//! lives in [`crate::session`] and is never mirrored here.

pub mod cart;
pub mod favorites;
