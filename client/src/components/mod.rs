//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their view-local state signals and bind every request to
//! their own lifetime; pages only compose them.

pub mod analysis_view;
pub mod chat_transcript;
pub mod product_card;
pub mod product_list;
pub mod track_form;
