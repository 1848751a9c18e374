//! HTTP surface: JSON routes over the supplier and product collections.
//!
//! Bodies may also be sent as urlencoded forms. Every response carries
//! permissive CORS headers.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `/products?name=` | list, optionally by name substring |
//! | GET, PUT, DELETE | `/products/{id}` | get, replace, remove |
//! | POST | `/products` | create |
//! | GET | `/suppliers` | list |
//! | GET, PUT, DELETE | `/suppliers/{id}` | get, replace, remove with its products |
//! | POST | `/suppliers` | create |

pub mod extract;
pub mod products;
pub mod response;
pub mod suppliers;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::clients::{ProductClient, SupplierClient};
use crate::integrity::CascadeCoordinator;

/// Shared handler state. Cloned per request; holds only channel handles.
#[derive(Clone)]
pub struct AppState {
    pub suppliers: SupplierClient,
    pub products: ProductClient,
    pub cascade: CascadeCoordinator,
}

impl AppState {
    pub fn new(suppliers: SupplierClient, products: ProductClient) -> Self {
        let cascade = CascadeCoordinator::new(suppliers.clone(), products.clone());
        Self {
            suppliers,
            products,
            cascade,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/suppliers", get(suppliers::list).post(suppliers::create))
        .route(
            "/suppliers/{id}",
            get(suppliers::show)
                .put(suppliers::update)
                .delete(suppliers::remove),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
