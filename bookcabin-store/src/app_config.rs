use serde::Deserialize;

/// Service configuration, loaded from environment variables. Every key has a
/// default, so the binary starts without any of them set.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server_port: u16,
    pub env: String,
    pub log_level: String,
    pub log_format: String,

    /// Socket-level timeouts in seconds. Logged at startup; the inbound
    /// timeout is the one enforced on request handling.
    pub http_read_timeout: u64,
    pub http_write_timeout: u64,
    pub http_inbound_timeout: u64,

    /// Per-fan-out deadline in seconds.
    pub aggregator_timeout: u64,

    pub garuda_path: String,
    pub lion_path: String,
    pub airasia_path: String,
    pub batik_path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server_port", 8080)?
            .set_default("env", "development")?
            .set_default("log_level", "info")?
            .set_default("log_format", "text")?
            .set_default("http_read_timeout", 10)?
            .set_default("http_write_timeout", 10)?
            .set_default("http_inbound_timeout", 10)?
            .set_default("aggregator_timeout", 5)?
            .set_default("garuda_path", "")?
            .set_default("lion_path", "")?
            .set_default("airasia_path", "")?
            .set_default("batik_path", "")?
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
