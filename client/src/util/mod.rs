//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/runtime concerns from page and component
//! logic to improve reuse and testability.

pub mod bound_task;
pub mod markdown;
