use dioxus::prelude::*;

use crate::Route;

/// Shown while a request is still in flight.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", "Loading..." }
    }
}

/// Shown when a request failed. There is no retry, only a way back home.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "error",
            p { "{message}" }
            Link { to: Route::Home {}, "Back to all breeds" }
        }
    }
}
