use api::{Services, SiteConfig};
use dioxus::prelude::*;

/// The injected service bundle. Provided once by the app root.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Site copy and tunables loaded from `site.toml`.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
