//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes components and reads route parameters; components own
//! their state and requests.

pub mod analysis;
pub mod assistant;
pub mod home;
pub mod products;
