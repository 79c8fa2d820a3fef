//! Raw sensor payload processing

pub mod orientation;

pub use orientation::{resolve_heading, RawOrientationEvent};
