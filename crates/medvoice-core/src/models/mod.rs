//! Domain models for the medvoice system.

mod annotation;
mod entry;
mod record;

pub use annotation::*;
pub use entry::*;
pub use record::*;
