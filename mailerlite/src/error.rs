use crate::models::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Bad request: {0}")]
    BadRequest(ApiError),
    #[error("Not found: {0}")]
    NotFound(ApiError),
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(ApiError),
    #[error("MailerLite server error: {0}")]
    ServerError(ApiError),
    #[error("Request error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {body}")]
    Unknown { status: u16, body: String },
    #[error("Cannot decode response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The HTTP status of the response that produced this error, if a response
    /// was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest(_) => Some(400),
            Error::NotFound(_) => Some(404),
            Error::UnprocessableEntity(_) => Some(422),
            Error::ServerError(_) => Some(500),
            Error::Unknown { status, .. } | Error::Decode { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            Error::InvalidArgument(_) => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
