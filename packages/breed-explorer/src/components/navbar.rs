use dioxus::prelude::*;

use crate::components::NavLink;
use crate::Route;

/// The header shared by every page, with the current page rendered below it.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { class: "navbar",
            span { class: "brand", "Breed Explorer" }
            nav {
                NavLink { to: Route::Home {}, "Breeds" }
            }
        }
        main { Outlet::<Route> {} }
    }
}
