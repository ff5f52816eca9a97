use std::env;
use std::time::Duration;

use crate::error::QuoteError;

pub const DEFAULT_BASE_URL: &str = "https://www3.bcb.gov.br/bc_moeda/rest";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BASE_URL_VAR: &str = "COTACAO_BASE_URL";
const TIMEOUT_VAR: &str = "COTACAO_TIMEOUT_SECS";

/// Settings for [`QuoteClient`](crate::QuoteClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `COTACAO_BASE_URL` and `COTACAO_TIMEOUT_SECS`, keeping the
    /// defaults for whichever is unset. A timeout of `0` disables it.
    pub fn from_env() -> Result<Self, QuoteError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, QuoteError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                QuoteError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }
}
