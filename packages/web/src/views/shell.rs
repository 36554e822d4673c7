//! Layout wrapping every route: navbar, page content, footer.

use dioxus::prelude::*;
use ui::{use_auth, BrandMark, Footer, LogoutButton, Navbar};

use crate::Route;

/// In-page anchors of the landing page.
const SECTIONS: [(&str, &str); 3] = [
    ("mission", "Mission"),
    ("features", "Features"),
    ("contact", "Contact"),
];

#[component]
pub fn PageShell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let on_home = use_route::<Route>() == Route::Home {};
    let greeting = auth().greeting();

    rsx! {
        div {
            class: "page",
            Navbar {
                brand: rsx! {
                    Link { to: Route::Home {}, class: "navbar__home", BrandMark {} }
                },
                if on_home {
                    for (id, title) in SECTIONS {
                        a { key: "{id}", href: "#{id}", "{title}" }
                    }
                } else {
                    Link { to: Route::Home {}, "Home" }
                }
                if let Some(greeting) = greeting {
                    span { class: "navbar__greeting", "{greeting}" }
                    LogoutButton {
                        class: "navbar__logout",
                        on_logout: move |_| {
                            nav.push(Route::Home {});
                        },
                    }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Signup {}, class: "cta-button", "Get Involved" }
                }
            }
            main {
                class: "page__content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
