//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own form orchestration and delegate rendering details to
//! `components`. None of them check access themselves; `app` wraps each in
//! the guard the route table assigns.

pub mod dashboards;
pub mod forms;
pub mod home;
pub mod login;
pub mod oauth_success;
pub mod shop;
pub mod signup;
pub mod verify_email;
