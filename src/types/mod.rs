//! Public types for the Plaudit API.

mod kind;
mod options;

pub use kind::{ComplimentType, SpecificityLevel};
pub use options::{GenerateOptions, Generated, Source};
