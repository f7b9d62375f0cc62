//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the auth REST calls and `types` defines the shared wire
//! schema. All requests go to this app's own server, which relays them to the
//! external backend.

pub mod api;
pub mod types;
