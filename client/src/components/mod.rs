//! Reusable UI components.

pub mod chrome;
pub mod route_guard;
