//! # Catalog Service
//!
//! > **Suppliers and their products, served over HTTP by resource-oriented actors.**
//!
//! Each collection (suppliers, products) lives in its own Tokio task and owns
//! its records outright. Handlers talk to the collections through typed
//! clients; the collections talk to each other only where referential
//! integrity requires it.
//!
//! ## 🏗️ Design
//!
//! ### One loop, two collections
//! `ResourceActor<T: ActorEntity>` is written once and stores anything that
//! implements [`ActorEntity`](framework::ActorEntity): it assigns ids, keeps
//! insertion order, answers filtered lists, and performs filtered bulk deletes.
//! [`Supplier`](model::Supplier) and [`Product`](model::Product) plug in their
//! own validation and hooks.
//!
//! ### Referential integrity
//! A product must reference an existing supplier. The Product actor's
//! `on_create`/`before_update` hooks resolve `idSupplier` through an
//! [`IntegrityCoordinator`](integrity::IntegrityCoordinator) before anything is
//! written. Deleting a supplier removes its products through the
//! [`CascadeCoordinator`](integrity::CascadeCoordinator).
//!
//! ### Async Context Injection
//! Dependencies are injected via `run(context)`, not at construction time, so
//! both actors can be created first and wired afterwards.
//!
//! ### Type-Safe Error Handling
//! Each collection has its own error enum ([`SupplierError`](supplier_actor::SupplierError),
//! [`ProductError`](product_actor::ProductError)). The HTTP layer maps them to
//! status codes in one place ([`http::response`]).
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the generic store engine and its test mocks.
//! - [`model`]: identifiers, records, request payloads and their validation.
//! - [`supplier_actor`], [`product_actor`]: the two `ActorEntity` implementations.
//! - [`clients`]: typed wrappers that parse ids and validate payloads before sending.
//! - [`integrity`]: supplier resolution and cascade delete.
//! - [`http`]: axum routes and the JSON envelope.
//! - [`lifecycle`]: [`CatalogSystem`](lifecycle::CatalogSystem) startup/shutdown and tracing setup.
//! - [`config`]: command-line and environment settings.
//!
//! ### Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod integrity;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod server;
pub mod supplier_actor;

pub use config::{CliArgs, ServerConfig};
pub use lifecycle::setup_tracing;
pub use server::run_server;
