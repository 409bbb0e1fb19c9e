//! View-local state models.
//!
//! DESIGN
//! ======
//! Each page owns one of these behind a `RwSignal`; none are provided as
//! shared context. Keeping transitions on plain structs lets them be tested
//! without a browser.

pub mod analysis;
pub mod chat;
pub mod products;
pub mod track;
pub mod view;
