//! Route classification and guard decisions.
//!
//! ARCHITECTURE
//! ============
//! `table` is the static path → policy registry shared by the guard and the
//! layout chrome. `guard` turns a policy plus the current session into a
//! render decision, and owns the cancellable delayed-redirect bookkeeping the
//! `RouteGuard` component drives.

pub mod guard;
pub mod table;

pub use guard::{
    GuardPolicy, GuardState, PendingRedirect, REDIRECT_DELAY, Requirement, ScheduledRedirect, Transition, advance, evaluate,
};
pub use table::{ROUTES, RoutePolicy, RouteTable};
