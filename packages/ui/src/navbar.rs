use dioxus::prelude::*;

use crate::context::use_site_config;
use crate::icons::FaHeart;
use crate::Icon;

/// Top bar: brand on the left, whatever the page passes as `children` on the
/// right.
#[component]
pub fn Navbar(
    /// Rendered inside the brand anchor, usually a router `Link`.
    brand: Element,
    children: Element,
) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar__brand",
                {brand}
            }
            div {
                class: "navbar__links",
                {children}
            }
        }
    }
}

/// Heart icon followed by the site name.
#[component]
pub fn BrandMark() -> Element {
    let config = use_site_config();
    let name = config.site.name;

    rsx! {
        span {
            class: "brand-mark",
            Icon { icon: FaHeart, width: 24, height: 24 }
            span { "{name}" }
        }
    }
}
