//! Repository for the `produtos` table.
//!
//! Timestamps are owned by these statements: `created_at` and `updated_at`
//! are both set to `NOW()` on insert, and every update moves `updated_at`
//! forward (never backwards, even if the server clock does).

use produtos_core::pagination::{clamp_offset, PageLimits};
use produtos_core::produto::ProdutoSort;
use produtos_core::types::DbId;
use sqlx::PgPool;

use crate::models::produto::{CreateProduto, Produto, ProdutoFilter, UpdateProduto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, descricao, preco, disponivel, created_at, updated_at";

/// Provides CRUD operations for produtos.
pub struct ProdutoRepo;

impl ProdutoRepo {
    /// Insert a new produto, returning the created row.
    ///
    /// The caller is expected to have validated `input`; `NUMERIC(10, 2)`
    /// would otherwise round an over-precise `preco` instead of rejecting it.
    pub async fn create(pool: &PgPool, input: &CreateProduto) -> Result<Produto, sqlx::Error> {
        let query = format!(
            "INSERT INTO produtos (nome, descricao, preco, disponivel, created_at, updated_at) \
             VALUES ($1, $2, $3, COALESCE($4, true), NOW(), NOW()) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Produto>(&query)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.preco)
            .bind(input.disponivel)
            .fetch_one(pool)
            .await
    }

    /// Find a produto by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Produto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM produtos WHERE id = $1");
        sqlx::query_as::<_, Produto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List produtos matching `filter`, ordered by `sort`, one page at a time.
    ///
    /// `search` matches `nome` case-insensitively as a substring, and also
    /// matches the textual form of `id` and `preco` (so `42` finds produto 42
    /// and `2.50` finds every produto at that price).
    pub async fn list(
        pool: &PgPool,
        filter: &ProdutoFilter,
        sort: ProdutoSort,
        limits: PageLimits,
    ) -> Result<Vec<Produto>, sqlx::Error> {
        let limit = limits.clamp(filter.limit);
        let offset = clamp_offset(filter.offset);
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.disponivel.is_some() {
            conditions.push(format!("disponivel = ${bind_idx}"));
            bind_idx += 1;
        }
        if search.is_some() {
            conditions.push(format!(
                "(nome ILIKE ${bind_idx} OR id::text ILIKE ${bind_idx} OR preco::text ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM produtos \
             {where_clause} \
             ORDER BY {order} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            order = sort.order_clause(),
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Produto>(&query);

        // Bind dynamic parameters in order.
        if let Some(disponivel) = filter.disponivel {
            q = q.bind(disponivel);
        }
        if let Some(search) = search {
            q = q.bind(format!("%{}%", escape_like(search)));
        }

        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Update a produto. Only non-`None` fields are applied; `updated_at`
    /// is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduto,
    ) -> Result<Option<Produto>, sqlx::Error> {
        let query = format!(
            "UPDATE produtos SET \
                nome = COALESCE($2, nome), \
                descricao = COALESCE($3, descricao), \
                preco = COALESCE($4, preco), \
                disponivel = COALESCE($5, disponivel), \
                updated_at = GREATEST(NOW(), updated_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Produto>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.descricao)
            .bind(input.preco)
            .bind(input.disponivel)
            .fetch_optional(pool)
            .await
    }

    /// Delete a produto. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every produto whose id is in `ids`. Unknown ids are skipped.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Escape `ILIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
