//! Networking: REST calls to the price tracker backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP requests; request/response shapes live in the
//! shared `catalog` crate so the CLI decodes exactly the same JSON.

pub mod api;
