use thiserror::Error;

use crate::inventory::SeedError;

/// Unified process-level error.
///
/// Everything that can stop the service from starting or serving ends up
/// here, is logged once in `main`, and exits the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
