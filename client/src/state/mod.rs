//! Client-side presentation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Domain state (sessions, record views, banners) comes from `records`;
//! this module holds only what the dashboards add on top.

pub mod ui;
