//! Startup, wiring, and shutdown of the collection actors.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::setup_tracing;
