/// A specialized result for breed lookups.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Everything that can go wrong between building a request and decoding its answer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be assembled, usually because the base url is not a valid uri.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with something other than a success status.
    #[error("{url} responded with status {status}")]
    Status {
        /// The numeric HTTP status.
        status: u16,
        /// The url that was requested.
        url: String,
    },

    /// The body was not the JSON we expected.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                url: err.url().map(|url| url.to_string()).unwrap_or_default(),
            },
            None => ApiError::Transport(err.to_string()),
        }
    }
}
