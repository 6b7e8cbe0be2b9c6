/// Errors encountered while fetching a remote narrative.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("no API key configured for the narrative service")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("invalid narrative endpoint: {0}")]
    Url(String),

    #[error("narrative request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("narrative service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("narrative response contained no text")]
    EmptyResponse,

    #[error("narrative payload is not valid: {0}")]
    Payload(#[from] serde_json::Error),
}
