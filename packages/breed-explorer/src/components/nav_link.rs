use dioxus::prelude::*;

use crate::Route;

/// Added to a link whose target is the current page or one of its parents.
pub const ACTIVE_CLASS: &str = "active";

/// Added to a link whose target is exactly the current page.
pub const EXACT_ACTIVE_CLASS: &str = "exact-active";

/// A [`Link`] that marks itself with [`ACTIVE_CLASS`] and [`EXACT_ACTIVE_CLASS`].
#[component]
pub fn NavLink(to: Route, children: Element) -> Element {
    let current = use_route::<Route>();
    let class = link_class(&current.to_string(), &to.to_string());

    rsx! {
        Link { to, class, {children} }
    }
}

/// The classes a link to `target` gets while `current` is shown.
///
/// Query strings and fragments are ignored. A link is active when the current path equals its
/// target or sits below it segment-wise, so `/home` does not activate on `/homepage`.
pub fn link_class(current: &str, target: &str) -> Option<String> {
    let current = path_only(current);
    let target = path_only(target);

    if current == target {
        return Some(format!("{ACTIVE_CLASS} {EXACT_ACTIVE_CLASS}"));
    }

    let below = !target.is_empty()
        && current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'));

    below.then(|| ACTIVE_CLASS.to_string())
}

fn path_only(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].trim_end_matches('/')
}
