//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The session signal is passed in by `App`.

pub mod admin;
pub mod employee;
pub mod login;
