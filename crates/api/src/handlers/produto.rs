//! Handlers for the `/produtos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use produtos_core::error::CoreError;
use produtos_core::produto::ProdutoSort;
use produtos_core::types::DbId;
use produtos_db::models::produto::{
    BulkDeleteProdutos, BulkDeleteResult, CreateProduto, ProdutoFilter, UpdateProduto,
};
use produtos_db::repositories::ProdutoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Produto",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/produtos?disponivel=&search=&sort=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProdutoFilter>,
) -> AppResult<impl IntoResponse> {
    let sort = ProdutoSort::parse(params.sort.as_deref())?;
    let produtos =
        ProdutoRepo::list(&state.pool, &params, sort, state.config.page_limits()).await?;
    Ok(Json(DataResponse { data: produtos }))
}

/// POST /api/v1/produtos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProduto>,
) -> AppResult<impl IntoResponse> {
    let produto = ProdutoRepo::create(&state.pool, &input).await?;
    tracing::info!(produto_id = produto.id, nome = %produto, "Produto created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: produto })))
}

/// GET /api/v1/produtos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let produto = ProdutoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: produto }))
}

/// PUT /api/v1/produtos/{id}
///
/// Partial update: absent fields keep their value. The body is validated by
/// the extractor before the existence check, so an invalid body is a 400
/// even for unknown ids.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateProduto>,
) -> AppResult<impl IntoResponse> {
    let produto = ProdutoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(produto_id = id, "Produto updated");

    Ok(Json(DataResponse { data: produto }))
}

/// DELETE /api/v1/produtos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if !ProdutoRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(produto_id = id, "Produto deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/produtos/bulk-delete
///
/// Ids that do not exist are ignored; the response reports how many rows
/// were actually removed.
pub async fn bulk_delete(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<BulkDeleteProdutos>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProdutoRepo::delete_many(&state.pool, &input.ids).await?;
    tracing::info!(requested = input.ids.len(), deleted, "Produtos bulk deleted");

    Ok(Json(DataResponse {
        data: BulkDeleteResult { deleted },
    }))
}
