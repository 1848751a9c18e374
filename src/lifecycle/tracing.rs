//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter that
//! reads its filter from `RUST_LOG` and falls back to `info`.
//!
//! Module paths are hidden (`with_target(false)`); store events carry an
//! `entity_type` field (`Supplier`, `Product`) instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown with the final collection size
//! - **Store Operations**: Create, Get, List, Update, Delete, and bulk deletes
//! - **HTTP Requests**: One span per handler, carrying the path id when present
//! - **Failures**: Rejected requests at `debug`, store failures and failed
//!   cascades at `error`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default (info)
//! cargo run
//!
//! # Show payloads and every read
//! RUST_LOG=debug cargo run
//!
//! # Only the store engine
//! RUST_LOG=catalog_service::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, deleting a supplier that owns two products looks like
//! the lines below. Store events come from the actor tasks, so they carry no
//! request span; the cascade summary is logged inside the handler span.
//!
//! ```text
//! INFO Deleted entity_type="Supplier" id=6650c0de1a2b3c4d5e6f7081 size=0
//! INFO Deleted matching entity_type="Product" filter=Supplier(SupplierId(ObjectId(6650c0de1a2b3c4d5e6f7081))) removed=2 size=0
//! INFO remove:delete_supplier: Supplier removed with its products supplier_id=6650c0de1a2b3c4d5e6f7081 deleted_count=2
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
