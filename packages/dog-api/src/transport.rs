use async_trait::async_trait;
use http::Request;

use crate::{ApiError, Result};

/// Sends a request and hands back the decoded JSON body.
///
/// The futures are not required to be `Send`: in the browser every request lives on the single
/// wasm thread.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request`, failing on transport errors and on non-success statuses.
    async fn execute(&self, request: Request<()>) -> Result<serde_json::Value>;
}

/// A [`Transport`] backed by [`reqwest::Client`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing client, e.g. one with custom timeouts.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request<()>) -> Result<serde_json::Value> {
        let url = request.uri().to_string();

        let response = self
            .client
            .request(request.method().clone(), &url)
            .headers(request.headers().clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}
