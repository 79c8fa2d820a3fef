//! Core types and constants for the compass system

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
