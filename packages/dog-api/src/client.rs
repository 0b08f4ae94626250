use std::{fmt::Debug, rc::Rc};

use serde::de::DeserializeOwned;

use crate::{
    request::{breed_request, list_request},
    ApiConfig, Breed, BreedTarget, ReqwestTransport, Result, Transport,
};

/// Fetches breeds through a shared [`Transport`].
///
/// Cloning is cheap, so the client can be handed to every component that needs it.
#[derive(Clone)]
pub struct BreedClient {
    config: Rc<ApiConfig>,
    transport: Rc<dyn Transport>,
}

impl BreedClient {
    /// A client that talks to the network with [`ReqwestTransport`].
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }

    /// A client that sends every request through `transport`.
    pub fn with_transport(config: ApiConfig, transport: impl Transport + 'static) -> Self {
        if !config.has_api_key() {
            tracing::warn!("no DOG_API_KEY was set at build time; requests are sent without a key");
        }

        Self {
            config: Rc::new(config),
            transport: Rc::new(transport),
        }
    }

    /// The configuration requests are built from.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch a single breed.
    pub async fn breed(&self, target: &BreedTarget) -> Result<Breed> {
        tracing::debug!("fetching breed {target}");
        self.fetch(breed_request(&self.config, target)?).await
    }

    /// Fetch every breed the API knows about.
    pub async fn list_breeds(&self) -> Result<Vec<Breed>> {
        tracing::debug!("fetching breed list");
        self.fetch(list_request(&self.config)?).await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: http::Request<()>) -> Result<T> {
        let url = request.uri().to_string();
        let body = self.transport.execute(request).await.inspect_err(|err| {
            tracing::error!("request to {url} failed: {err}");
        })?;

        Ok(serde_json::from_value(body).inspect_err(|err| {
            tracing::error!("unexpected response from {url}: {err}");
        })?)
    }
}

impl Debug for BreedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreedClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl PartialEq for BreedClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.transport, &other.transport)
    }
}
