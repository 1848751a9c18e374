//! Generic document-store framework.
//!
//! This module provides the building blocks for type-safe collections that
//! each live in their own actor and answer CRUD, filtered listing, and
//! filtered bulk delete requests.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored by an actor
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Typed, cloneable handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
