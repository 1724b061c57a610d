//! Server configuration

use clap::Parser;

use crate::error::{ServerError, ServerResult};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Command-line arguments, each with an environment fallback
#[derive(Parser, Debug)]
#[command(name = "void-gateway")]
#[command(about = "HTTP ingestion endpoint for VOID protocol invoice packets")]
pub struct Args {
    /// Host to bind to
    #[arg(long, env = "VOID_GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "VOID_GATEWAY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level
    #[arg(long, env = "VOID_GATEWAY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reject settings the server cannot start with
    pub fn validate(&self) -> ServerResult<()> {
        if self.host.trim().is_empty() {
            return Err(ServerError::Config("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(ServerError::Config("port must be non-zero".into()));
        }
        Ok(())
    }

    /// `host:port` string to bind; hostnames are resolved by the listener
    pub fn listen_addr(&self) -> ServerResult<String> {
        self.validate()?;
        Ok(format!("{}:{}", self.host.trim(), self.port))
    }
}
