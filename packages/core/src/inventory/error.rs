//! Error types for inventory operations

use thiserror::Error;

/// Errors raised by inventory mutations. Reads never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Product not found: {id}")]
    NotFound { id: String },
}

/// Errors from loading seed data
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {source}")]
    Format {
        #[from]
        source: serde_json::Error,
    },

    #[error("Duplicate product id in seed data: {id}")]
    DuplicateId { id: String },

    #[error("Negative stock {stock} for product {id}")]
    NegativeStock { id: String, stock: i64 },
}

impl InventoryError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
