//! Field rules for the produto catalog.
//!
//! Lives in `core` (no IO) so the DTO validators in `produtos-db` and any
//! future tooling share one definition of what a valid produto looks like.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of `nome`, counted in characters.
pub const NOME_MAX_CHARS: usize = 100;

/// Total digits allowed in `preco` (matches `NUMERIC(10, 2)`).
pub const PRECO_MAX_DIGITS: u32 = 10;

/// Digits allowed after the decimal point in `preco`.
pub const PRECO_DECIMAL_PLACES: u32 = 2;

// ---------------------------------------------------------------------------
// Digit counting
// ---------------------------------------------------------------------------

/// Digit breakdown of a decimal value as written (trailing zeros included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCount {
    /// Significant digits in total.
    pub digits: u32,
    /// Digits after the decimal point.
    pub decimals: u32,
    /// Digits before the decimal point.
    pub whole: u32,
}

/// Count the digits of `value` the way a `NUMERIC(p, s)` column sees them.
///
/// `0.05` has two digits, both decimal; `2.50` has three digits, two of them
/// decimal. The scale is taken as-is, so `2.500` reports three decimals.
pub fn count_digits(value: &Decimal) -> DigitCount {
    let scale = value.scale();
    let mantissa_digits = decimal_len(value.mantissa().unsigned_abs());

    let (digits, decimals) = if scale == 0 {
        (mantissa_digits, 0)
    } else if scale > mantissa_digits {
        (scale, scale)
    } else {
        (mantissa_digits, scale)
    };

    DigitCount {
        digits,
        decimals,
        whole: digits - decimals,
    }
}

fn decimal_len(mut n: u128) -> u32 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn field_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// `nome` must be non-empty and at most [`NOME_MAX_CHARS`] characters.
pub fn validate_nome(nome: &str) -> Result<(), ValidationError> {
    if nome.is_empty() {
        return Err(field_error("required", "nome must not be empty"));
    }
    if nome.chars().count() > NOME_MAX_CHARS {
        return Err(field_error(
            "max_length",
            format!("nome must be at most {NOME_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

/// `descricao` is unbounded but required.
pub fn validate_descricao(descricao: &str) -> Result<(), ValidationError> {
    if descricao.is_empty() {
        return Err(field_error("required", "descricao must not be empty"));
    }
    Ok(())
}

/// `preco` must fit `NUMERIC(10, 2)` exactly. Nothing is rounded.
pub fn validate_preco(preco: &Decimal) -> Result<(), ValidationError> {
    let count = count_digits(preco);
    let max_whole = PRECO_MAX_DIGITS - PRECO_DECIMAL_PLACES;

    if count.digits > PRECO_MAX_DIGITS {
        return Err(field_error(
            "max_digits",
            format!("preco must have no more than {PRECO_MAX_DIGITS} digits in total"),
        ));
    }
    if count.decimals > PRECO_DECIMAL_PLACES {
        return Err(field_error(
            "max_decimal_places",
            format!("preco must have no more than {PRECO_DECIMAL_PLACES} decimal places"),
        ));
    }
    if count.whole > max_whole {
        return Err(field_error(
            "max_whole_digits",
            format!("preco must have no more than {max_whole} digits before the decimal point"),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// List ordering
// ---------------------------------------------------------------------------

/// Columns a produto list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Nome,
    Preco,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Nome => "nome",
            SortField::Preco => "preco",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }
}

/// Parsed `?sort=` value: a column name, optionally prefixed with `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProdutoSort {
    pub field: SortField,
    pub descending: bool,
}

impl Default for ProdutoSort {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            descending: false,
        }
    }
}

impl ProdutoSort {
    /// Parse `"nome"`, `"-preco"`, etc. `None` yields the default (`id` ascending).
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };

        let (descending, name) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let field = match name {
            "id" => SortField::Id,
            "nome" => SortField::Nome,
            "preco" => SortField::Preco,
            "created_at" => SortField::CreatedAt,
            "updated_at" => SortField::UpdatedAt,
            other => {
                return Err(CoreError::Validation(format!(
                    "Invalid sort field '{other}'. Valid fields: id, nome, preco, created_at, updated_at"
                )))
            }
        };

        Ok(Self { field, descending })
    }

    /// SQL `ORDER BY` body. `id` breaks ties so paging is stable.
    pub fn order_clause(&self) -> String {
        let dir = if self.descending { "DESC" } else { "ASC" };
        match self.field {
            SortField::Id => format!("id {dir}"),
            field => format!("{} {dir}, id ASC", field.column()),
        }
    }
}
