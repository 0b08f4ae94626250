//! Browse dog breeds from TheDogAPI.
//!
//! The app is a [`Router`] over [`Route`]: a list of every breed at `/home` and a details page per
//! breed at `/details/:breed?id=<number>`. All data comes from a [`BreedClient`] provided as
//! context, so tests can swap the network for something they control.

use dioxus::prelude::*;
use dog_api::{ApiConfig, BreedClient};

pub mod components;
pub mod hooks;
mod route;
pub mod views;

pub use route::{DetailsQuery, Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The app as it ships, talking to the public API with the key baked in at build time.
#[component]
pub fn App() -> Element {
    let client = use_hook(|| BreedClient::new(ApiConfig::default()));

    rsx! {
        Explorer { client }
    }
}

/// The app with an explicit client.
#[component]
pub fn Explorer(client: BreedClient) -> Element {
    use_context_provider(|| client);

    rsx! {
        Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
