use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The single server a lookup is sent to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Hostname or IP literal of the DNS server.
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Bounded wait for the one response we expect.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Capacity of the receive buffer in bytes.
    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: None,
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_response_size: default_max_response_size(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_response_size() -> usize {
    4096
}
