// Library root. Exposes internal modules for integration tests in `tests/`.
// Production entry point remains `src/main.rs`.

pub mod api;
pub mod error;
pub mod graphql;
pub mod inventory;
pub mod metrics;
pub mod store;

// Start-up plumbing used by the binary.
pub mod cli;
pub mod config;
pub mod logging;
