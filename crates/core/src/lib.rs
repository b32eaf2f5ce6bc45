pub mod error;
pub mod pagination;
pub mod produto;
pub mod types;
