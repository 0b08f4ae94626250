use dioxus::prelude::*;

use crate::components::{ErrorMessage, Loading};
use crate::hooks::use_breed_list;
use crate::Route;

/// Every breed, each linking to its details page.
#[component]
pub fn Home() -> Element {
    let breeds = use_breed_list();

    rsx! {
        section { class: "home",
            h1 { "Dog breeds" }
            match &*breeds.read() {
                None => rsx! { Loading {} },
                Some(Ok(breeds)) => rsx! {
                    ul { class: "breed-list",
                        for breed in breeds {
                            li { key: "{breed.id}",
                                Link { to: Route::details(breed.name.clone(), breed.id), "{breed.name}" }
                                if let Some(group) = &breed.breed_group {
                                    span { class: "breed-group", "{group}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    ErrorMessage { message: format!("Could not load the breed list: {err}") }
                },
            }
        }
    }
}
