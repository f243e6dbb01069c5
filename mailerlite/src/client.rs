use crate::{
    config::Config,
    error::{Error, Result},
    models::ApiError,
};
use reqwest::{Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "X-MailerLite-ApiKey";

#[derive(Debug, Clone, Copy)]
pub struct PageSize(pub(crate) u32);

impl Default for PageSize {
    fn default() -> Self {
        Self(100)
    }
}

/// A decoded response body. `204 No Content` comes back as `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Empty,
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Empty => None,
        }
    }
}

#[derive(Clone)]
pub struct Client {
    base_url: Url,
    api_key: String,
    http: reqwest::Client,
    pub(crate) page_size: PageSize,
}

/// A MailerLite v2 client. Cloning is cheap and clones share the connection
/// pool, so one instance can serve any number of concurrent callers.
impl Client {
    /// Builds a client from an explicit configuration.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use mailerlite::{Client, Config};
    ///
    /// let client = Client::new(Config::new("api-abcd1234")).unwrap();
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::invalid("API key cannot be empty"));
        }

        let mut base_url = config.base_url;
        // Without the trailing slash `Url::join` would replace the last segment (`v2`)
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::invalid(format!("invalid base URL `{base_url}`: {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url,
            api_key: config.api_key,
            http,
            page_size: Default::default(),
        })
    }

    /// Builds a client from `MAILERLITE_API_KEY` and `MAILERLITE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Page size used by the streaming helpers.
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid("page size must be greater than zero"));
        }
        self.page_size = PageSize(page_size);
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues a single request against `path` (relative to the base URL) and
    /// maps the outcome.
    ///
    /// `body`, when given, must already be JSON text. Malformed input is
    /// rejected before anything goes on the wire.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use mailerlite::{Client, Config, Method, Payload};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), mailerlite::Error> {
    ///     let client = Client::new(Config::new("api-abcd1234"))?;
    ///     match client.perform(Method::GET, "stats", None).await? {
    ///         Payload::Json(stats) => println!("{stats}"),
    ///         Payload::Empty => println!("no content"),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn perform(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Payload> {
        self.execute(method, path, &[], body)
            .await
            .map(|(_, payload)| payload)
    }

    /// Like [`Client::perform`] but decodes the payload into `T`. An empty
    /// payload decodes as JSON `null`, so only `Option`/unit targets accept it.
    pub async fn perform_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T> {
        self.request(method, path, &[], body).await
    }

    /// Like [`Client::perform`] for calls whose response body is irrelevant.
    pub async fn perform_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<()> {
        self.perform(method, path, body).await.map(|_| ())
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<T> {
        let (status, payload) = self.execute(method, path, query, body).await?;
        let value = payload.into_json().unwrap_or(serde_json::Value::Null);
        serde_json::from_value(value).map_err(|source| Error::Decode { status, source })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<(u16, Payload)> {
        let url = self.url(path, query)?;
        if let Some(body) = &body {
            serde_json::from_str::<serde::de::IgnoredAny>(body)
                .map_err(|e| Error::invalid(format!("request body is not valid JSON: {e}")))?;
        }

        debug!(%method, %url, "sending MailerLite request");
        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            req = req.header("Content-Type", "application/json").body(body);
        }

        let resp = req.send().await.inspect_err(|e| {
            warn!(%method, %url, error = %e, "MailerLite request failed");
        })?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        debug!(%method, %url, status, "received MailerLite response");

        let payload = map_response(status, text).inspect_err(|e| {
            warn!(%method, %url, status, error = %e, "MailerLite call unsuccessful");
        })?;
        Ok((status, payload))
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Err(Error::invalid("request path cannot be empty"));
        }
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| Error::invalid(format!("invalid request path `{path}`: {e}")))?;
        // The API key goes out with every request, so never leave the base URL
        if url.origin() != self.base_url.origin()
            || !url.path().starts_with(self.base_url.path())
        {
            return Err(Error::invalid(format!("request path `{path}` escapes the base URL")));
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

pub(crate) fn to_body<T: Serialize>(value: &T) -> Result<Option<String>> {
    serde_json::to_string(value)
        .map(Some)
        .map_err(|e| Error::invalid(format!("cannot serialize request body: {e}")))
}

/// Translates a status code and raw body into a [`Payload`] or an [`Error`].
pub fn map_response(status: u16, body: String) -> Result<Payload> {
    match status {
        200 | 201 => serde_json::from_str(&body)
            .map(Payload::Json)
            .map_err(|source| Error::Decode { status, source }),
        204 => Ok(Payload::Empty),
        400 => Err(Error::BadRequest(ApiError::from_body(&body))),
        404 => Err(Error::NotFound(ApiError::from_body(&body))),
        422 => Err(Error::UnprocessableEntity(ApiError::from_body(&body))),
        500 => Err(Error::ServerError(ApiError::from_body(&body))),
        _ => Err(Error::Unknown { status, body }),
    }
}
