//! Shared fleet domain: wire records, form drafts, editor and list state,
//! session gate and the backend endpoint catalogue.
//!
//! Pure state with no I/O; the web client and the CLI supply transport.

pub mod banner;
pub mod draft;
pub mod editor;
pub mod endpoint;
pub mod entity;
pub mod error;
pub mod list;
pub mod session;
pub mod view;
