//! Input validation

pub mod target;

pub use target::{validate_coordinate, TargetError};
