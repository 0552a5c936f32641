//! Service configuration from the environment.

use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::solver::SolverStrategy;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub strategy: SolverStrategy,
    pub log_level: String,
    pub log_json: bool,
}

impl ServerConfig {
    /// Reads `ROSTER_LISTEN_ADDR` (or `PORT`), `SOLVER_STRATEGY`,
    /// `ROSTER_LOG_LEVEL` and `ROSTER_LOG_JSON`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = match (lookup("ROSTER_LISTEN_ADDR"), lookup("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => format!("0.0.0.0:{port}"),
            (None, None) => DEFAULT_LISTEN_ADDR.to_string(),
        };
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid listen address: {listen_addr}"))?;

        // Unrecognised names fall back to greedy
        let strategy = lookup("SOLVER_STRATEGY")
            .map(|name| SolverStrategy::resolve(&name))
            .unwrap_or_default();

        let log_level = lookup("ROSTER_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_json = lookup("ROSTER_LOG_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            strategy,
            log_level,
            log_json,
        })
    }
}
