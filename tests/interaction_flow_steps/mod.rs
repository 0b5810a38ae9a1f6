//! Step definitions for interaction flow scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
