use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod campaigns;
pub mod groups;
pub mod segments;
pub mod stats;

pub use campaigns::*;
pub use groups::*;
pub use segments::*;
pub use stats::*;

/// The error envelope MailerLite returns alongside 4xx/5xx responses:
/// `{"error": {"code": 123, "message": "..."}}`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ApiError {
    pub code: Option<i64>,
    pub message: String,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

impl ApiError {
    /// Extracts the error from a raw response body. Bodies that don't follow
    /// the envelope are kept verbatim as the message.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => envelope.error,
            Err(_) => Self {
                code: None,
                message: body.to_string(),
            },
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

/// Pagination shared by the list endpoints. Unset fields are left to the
/// server defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListOptions {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub(crate) fn validate(&self) -> crate::error::Result<()> {
        if self.limit == Some(0) {
            return Err(crate::error::Error::invalid("limit must be greater than zero"));
        }
        Ok(())
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![];
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        query
    }
}

/// Count and rate pair used by campaign and segment reports.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Rate {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub rate: f64,
}
