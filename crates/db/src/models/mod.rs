//! Row models and request DTOs.

pub mod produto;
