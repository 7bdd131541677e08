use std::path::PathBuf;

use clap::Parser;

/// SupplySight CLI arguments. Each flag overrides its environment variable.
#[derive(Debug, Parser)]
#[command(
    name = "supplysight",
    version,
    about = "Inventory dashboard GraphQL API"
)]
pub struct Cli {
    /// Address to listen on (BIND_ADDR)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// JSON product list replacing the built-in seed (SEED_FILE)
    #[arg(long)]
    pub seed_file: Option<PathBuf>,

    /// Single browser origin allowed by CORS; any origin when unset (CORS_ALLOW_ORIGIN)
    #[arg(long)]
    pub cors_origin: Option<String>,

    /// Log output: compact or json (LOG_FORMAT)
    #[arg(long)]
    pub log_format: Option<String>,
}
