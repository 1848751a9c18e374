//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod product_client;
pub mod supplier_client;

pub use actor_client::*;
pub use product_client::*;
pub use supplier_client::*;
