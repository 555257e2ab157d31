//! Admin back-office API.
//!
//! These endpoints carry no authentication of their own; the admin
//! surface is expected to be reachable only from trusted infrastructure
//! (private network or reverse-proxy auth).

pub mod messages;
pub mod orders;
pub mod products;
pub mod restorations;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Build the admin router, nested under `/api/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list).post(products::create),
        )
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .route("/orders", get(orders::list))
        .route("/orders/{id}/status", put(orders::update_status))
        .route("/restorations", get(restorations::list))
        .route("/restorations/{id}", put(restorations::update))
        .route("/messages", get(messages::list))
        .route("/messages/{id}/read", put(messages::mark_read))
}
