//! Server configuration.

use crate::domain::{Ttl, TtlPolicy, ValueObjectError};

/// Runtime configuration of the presence server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to (e.g. "127.0.0.1")
    pub host: String,
    /// Port to bind to; 0 picks an ephemeral port
    pub port: u16,
    /// TTL applied to check-ins and to refreshes without a positive `expires_in`
    pub default_ttl: Ttl,
}

impl ServerConfig {
    pub fn new(host: String, port: u16, default_ttl_secs: i64) -> Result<Self, ValueObjectError> {
        Ok(Self {
            host,
            port,
            default_ttl: Ttl::from_secs(default_ttl_secs)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy::new(self.default_ttl)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            default_ttl: Ttl::default(),
        }
    }
}
