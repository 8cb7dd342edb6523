//! Server configuration
//!
//! Every option can come from a flag or an environment variable; flags win.
//!
//! | Flag | Environment | Default |
//! |---|---|---|
//! | `--host` | `LEXIS_HOST` | `0.0.0.0` |
//! | `--port` | `PORT` | `3000` |
//! | `--database` | `DATABASE_NAME` | `string_analyzer.db` |
//! | `--in-memory` | `LEXIS_IN_MEMORY` | off |
//! | `--log-level` | (`RUST_LOG` overrides) | `info` |

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address {addr:?}: {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(name = "lexis-server")]
#[command(about = "Store strings, analyze them, and query them in plain English")]
#[command(version)]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "LEXIS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// SQLite database file
    #[arg(long, env = "DATABASE_NAME", default_value = "string_analyzer.db")]
    pub database: PathBuf,

    /// Keep records in memory only (nothing persisted)
    #[arg(long, env = "LEXIS_IN_MEMORY")]
    pub in_memory: bool,

    /// Default log filter (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Address the server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|source| ConfigError::InvalidAddress { addr, source })
    }
}
