use redact::Secret;
use serde::Deserialize;

/// Service configuration, extracted from environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// URL of the upstream chat completions endpoint.
    pub completion_endpoint: String,

    /// Bearer token sent with every upstream request.
    pub completion_api_key: Secret<String>,

    /// Fixed `customerId` header value the upstream expects.
    pub completion_customer_id: String,

    /// Upstream request timeout, in seconds.
    #[serde(default = "default_completion_timeout_seconds")]
    pub completion_timeout_seconds: u64,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins. Permissive when unset.
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,
}

const fn default_completion_timeout_seconds() -> u64 {
    120
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}
