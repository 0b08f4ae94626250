use dioxus::prelude::*;

use crate::components::{DetailsContent, ErrorMessage, Loading};
use crate::hooks::use_breed;
use crate::route::DetailsQuery;

/// One breed, looked up by the `id` query parameter or, failing that, by name.
#[component]
pub fn Details(breed: ReadSignal<String>, query: ReadSignal<DetailsQuery>) -> Element {
    let details = use_breed(breed, query);

    rsx! {
        section { class: "details",
            match &*details.read() {
                None => rsx! { Loading {} },
                Some(Ok(breed_data)) => rsx! {
                    DetailsContent { breed_data: breed_data.clone() }
                },
                Some(Err(err)) => rsx! {
                    ErrorMessage { message: format!("Could not load breed details: {err}") }
                },
            }
        }
    }
}
