use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to all breeds" }
        }
    }
}
