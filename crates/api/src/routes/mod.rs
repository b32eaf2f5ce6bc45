pub mod health;
pub mod produto;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /produtos                                        list, create
/// /produtos/{id}                                   get, update, delete
/// /produtos/bulk-delete                            delete many (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/produtos", produto::router())
}
