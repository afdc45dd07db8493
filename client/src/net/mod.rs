//! Networking for the fleet REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only module that performs HTTP. Endpoint paths, wire types
//! and error decoding come from the shared `records` crate.

pub mod api;
