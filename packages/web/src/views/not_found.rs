use dioxus::prelude::*;

use crate::Route;

/// Fallback for every path the router does not know.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "no route");

    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "There is nothing at " code { "{path}" } "." }
            Link { to: Route::Home {}, class: "cta-button", "Back to home" }
        }
    }
}
