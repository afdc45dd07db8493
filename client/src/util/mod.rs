//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate configuration, route guarding and request/refresh
//! orchestration from page and component rendering.

pub mod auth;
pub mod config;
pub mod sync;
