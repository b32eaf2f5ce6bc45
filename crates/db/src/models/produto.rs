//! Produto entity model and DTOs.

use std::fmt;

use produtos_core::produto::{validate_descricao, validate_nome, validate_preco};
use produtos_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `produtos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Produto {
    pub id: DbId,
    pub nome: String,
    pub descricao: String,
    /// Serialized as a string (`"2.50"`) so no precision is lost in JSON.
    pub preco: Decimal,
    pub disponivel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Produto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nome)
    }
}

/// DTO for creating a new produto. `disponivel` defaults to `true`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduto {
    #[validate(custom(function = "validate_nome"))]
    pub nome: String,
    #[validate(custom(function = "validate_descricao"))]
    pub descricao: String,
    #[validate(custom(function = "validate_preco"))]
    pub preco: Decimal,
    pub disponivel: Option<bool>,
}

/// DTO for updating an existing produto. Only the fields present are applied,
/// and each of them goes through the same rules as on creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProduto {
    #[validate(custom(function = "validate_nome"))]
    pub nome: Option<String>,
    #[validate(custom(function = "validate_descricao"))]
    pub descricao: Option<String>,
    #[validate(custom(function = "validate_preco"))]
    pub preco: Option<Decimal>,
    pub disponivel: Option<bool>,
}

/// Query parameters for listing produtos.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProdutoFilter {
    /// Only produtos with this availability.
    pub disponivel: Option<bool>,
    /// Case-insensitive substring match on `nome`, `id` or `preco`.
    pub search: Option<String>,
    /// Column to order by, `-` prefix for descending (e.g. `-preco`).
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for deleting several produtos at once.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkDeleteProdutos {
    #[validate(length(min = 1, message = "ids must not be empty"))]
    pub ids: Vec<DbId>,
}

/// Response body for a bulk delete.
#[derive(Debug, Clone, Serialize)]
pub struct BulkDeleteResult {
    pub deleted: u64,
}
