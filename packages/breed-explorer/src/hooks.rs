use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use dog_api::{ApiError, Breed, BreedClient, BreedTarget};

use crate::route::DetailsQuery;

/// Load one breed, preferring the id from the query over the name.
///
/// Both inputs are read inside the resource, so changing either one cancels the request that is
/// still in flight and starts a new one. A response for an old input can never land after the
/// response for the new one.
pub fn use_breed(
    breed: ReadSignal<String>,
    query: ReadSignal<DetailsQuery>,
) -> Resource<Result<Breed, ApiError>> {
    let client = use_context::<BreedClient>();

    use_resource(move || {
        let client = client.clone();
        let target = BreedTarget::new(&breed.read(), query.read().id);

        async move {
            debug!("loading breed {target}");
            client.breed(&target).await
        }
    })
}

/// Load every breed for the home page.
pub fn use_breed_list() -> Resource<Result<Vec<Breed>, ApiError>> {
    let client = use_context::<BreedClient>();

    use_resource(move || {
        let client = client.clone();
        async move { client.list_breeds().await }
    })
}
