//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers validate input, delegate to the corresponding repository in
//! `produtos_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod produto;
