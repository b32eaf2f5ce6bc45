//! Route definitions for produtos.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::produto;
use crate::state::AppState;

/// Routes mounted at `/produtos`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// POST   /bulk-delete   -> bulk_delete
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(produto::list).post(produto::create))
        .route("/bulk-delete", post(produto::bulk_delete))
        .route(
            "/{id}",
            get(produto::get_by_id)
                .put(produto::update)
                .delete(produto::delete),
        )
}
