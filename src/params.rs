use anyhow::Context as _;
use serde::Deserialize;

/// Default HTTP request timeout in seconds
fn default_http_timeout() -> u64 {
    30
}

/// Default HTTP connection timeout in seconds
fn default_http_connect_timeout() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct Params {
    /// URL of the relay endpoint receiving button notifications
    pub relay_endpoint: String,

    #[serde(default)]
    pub insecure_mode: bool,

    // HTTP Client Configuration
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default = "default_http_connect_timeout")]
    pub http_connect_timeout: u64,
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }
}
