use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum BinmarkError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
    #[error("Authentication failed ({status}): check JSONBIN_API_KEY and JSONBIN_ACCESS_KEY in your .env file")]
    Auth { status: StatusCode },
    #[error("Can't reach remote: {0}")]
    Network(reqwest::Error),
    #[error("Remote request failed ({status}): {body}")]
    Remote { status: StatusCode, body: String },
    #[error("Bookmark not found: {0}")]
    NotFound(String),
    #[error("Can't extract metadata for {url}: {cause}")]
    ExtractionFailed { url: String, cause: String },
    #[error("Source not supported: {0}")]
    UnsupportedSource(String),
    #[error("Can't create client: {0}")]
    CreateClient(reqwest::Error),
    #[error("Unexpected status {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },
    #[error("Can't read response body: {0}")]
    ParseHttpResponse(reqwest::Error),
    #[error("Binary response for {0}")]
    BinaryResponse(String),
    #[error("Empty response for {0}")]
    EmptyResponse(String),
    #[error("Can't serialize json: {0}")]
    SerializeJson(serde_json::Error),
    #[error("Can't deserialize json: {0}")]
    DeserializeJson(serde_json::Error),
    #[error("Can't parse url: {0}")]
    ParseUrl(#[from] ParseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BinmarkError {
    pub fn extraction_failed(url: impl ToString, cause: impl ToString) -> Self {
        Self::ExtractionFailed {
            url: url.to_string(),
            cause: cause.to_string(),
        }
    }

    /// Metadata problems are recovered by asking the user instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BinmarkError::ExtractionFailed { .. } | BinmarkError::UnsupportedSource(_)
        )
    }
}
