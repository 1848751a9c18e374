//! Pure data structures for the catalog: identifiers, records, and the
//! request payloads they are built from.
//!
//! Payloads (`*Payload`) mirror request bodies and accept absent fields.
//! `into_draft()` runs their `Validate` rules and turns them into drafts (`*Draft`) that the stores accept.

pub mod object_id;
pub mod product;
pub mod supplier;
pub mod validation;

pub use object_id::*;
pub use product::*;
pub use supplier::*;
pub use validation::FieldError;
