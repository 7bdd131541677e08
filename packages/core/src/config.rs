use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::logging::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub cors_allow_origin: Option<String>,
    pub log_format: LogFormat,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Every variable is optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_bind_addr(
            &lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;

        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let seed_file = lookup("SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let cors_allow_origin = lookup("CORS_ALLOW_ORIGIN").filter(|v| !v.trim().is_empty());

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => LogFormat::parse(&raw)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            port,
            seed_file,
            cors_allow_origin,
            log_format,
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Result<Self, String> {
        if let Some(bind) = cli.bind.as_deref() {
            self.bind_addr = parse_bind_addr(bind)?;
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(seed_file) = cli.seed_file.clone() {
            self.seed_file = Some(seed_file);
        }
        if let Some(origin) = cli.cors_origin.clone() {
            self.cors_allow_origin = Some(origin);
        }
        if let Some(format) = cli.log_format.as_deref() {
            self.log_format = LogFormat::parse(format)?;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_bind_addr(raw: &str) -> Result<IpAddr, String> {
    raw.trim()
        .parse::<IpAddr>()
        .map_err(|_| format!("Invalid BIND_ADDR: {}", raw))
}

fn parse_port(raw: &str) -> Result<u16, String> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| "PORT must be a valid port number".to_string())
}
