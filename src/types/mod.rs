//! Type definitions for rolltrack

mod calendar;
mod color;
mod error;
mod zone;

pub use calendar::*;
pub use color::*;
pub use error::*;
pub use zone::*;
