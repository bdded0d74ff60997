//! Core building blocks: resize parameters and the resize primitives.
//! These are internal pieces consumed by the high-level `api` module.
pub mod params;
pub mod processing;
