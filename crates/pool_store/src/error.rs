/// Errors raised by a pool store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("invalid store URL: {0}")]
    Url(String),

    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("write to {table} failed with status {status}: {body}")]
    Api {
        table: &'static str,
        status: u16,
        body: String,
    },
}
