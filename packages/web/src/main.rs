use api::{Services, SiteConfig};
use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Home, Login, NotFound, PageShell, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PageShell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Parse the embedded site configuration, falling back to the defaults.
fn load_site_config(raw: &str) -> SiteConfig {
    match SiteConfig::from_toml(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", SiteConfig::filename(), e);
            SiteConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| load_site_config(SITE_TOML));
    use_context_provider(|| Services::in_memory(config.otp.clone()));
    let title = config.site.name;

    rsx! {
        // Global app resources
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Option<Route> {
        path.parse::<Route>().ok()
    }

    #[test]
    fn test_known_routes() {
        assert_eq!(parse("/"), Some(Route::Home {}));
        assert_eq!(parse("/login"), Some(Route::Login {}));
        assert_eq!(parse("/signup"), Some(Route::Signup {}));
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        assert_eq!(
            parse("/donate"),
            Some(Route::NotFound {
                segments: vec!["donate".to_string()]
            })
        );
        assert_eq!(
            parse("/login/extra"),
            Some(Route::NotFound {
                segments: vec!["login".to_string(), "extra".to_string()]
            })
        );
    }

    #[test]
    fn test_routes_render_their_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Signup {}.to_string(), "/signup");
    }

    #[test]
    fn test_embedded_site_config_matches_defaults() {
        assert_eq!(load_site_config(SITE_TOML), SiteConfig::default());
    }

    #[test]
    fn test_broken_site_config_falls_back() {
        let config = load_site_config("[otp]\ncode_length = \"six\"");
        assert_eq!(config, SiteConfig::default());
    }
}
