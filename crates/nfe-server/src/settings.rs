use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: HttpCfg,
    pub lookup: LookupCfg,
    pub converter: ConverterCfg,
}

#[derive(Debug, Deserialize)]
pub struct HttpCfg {
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct LookupCfg {
    /// Artificial delay applied by the simulated source, in milliseconds.
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConverterCfg {
    /// External XML to DANFE-PDF conversion endpoint
    pub endpoint: String,
    /// Outbound request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bound on attempts for unreachable-upstream retries
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_attempts() -> u32 {
    3
}

impl Settings {
    pub fn load(config_path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(config_path)?;
        let settings = toml::from_str(&raw)?;
        Ok(settings)
    }
}
