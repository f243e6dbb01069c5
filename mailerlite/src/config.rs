use crate::error::{Error, Result};
use std::{env, fmt};

pub const DEFAULT_BASE_URL: &str = "https://api.mailerlite.com/api/v2/";
pub const API_KEY_ENV: &str = "MAILERLITE_API_KEY";
pub const BASE_URL_ENV: &str = "MAILERLITE_BASE_URL";

/// Everything a [`Client`](crate::Client) needs to talk to MailerLite.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `MAILERLITE_API_KEY` and, optionally, `MAILERLITE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| Error::invalid(format!("{API_KEY_ENV} is not set")))?;
        let config = Self::new(api_key);
        Ok(match env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
