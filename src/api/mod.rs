//! Public compass API and presentation-facing types

pub mod compass;
pub mod formatting;
pub mod types;

pub use compass::{Compass, ViewModelCallback};
pub use types::{PayloadError, PositionReadout, ViewModel};
