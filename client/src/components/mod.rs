//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, tables and dialogs. State is passed in
//! as signal props by the owning page; nothing is read from context.

pub mod data_table;
pub mod detail_dialog;
pub mod editor_dialog;
pub mod error_banner;
pub mod service_panel;
pub mod tab_bar;
pub mod toolbar;
pub mod user_panel;
pub mod vehicle_filter;
