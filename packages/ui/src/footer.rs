use chrono::Datelike;
use dioxus::prelude::*;

use crate::context::use_site_config;

/// `© <year> <site>. All rights reserved.`
pub fn copyright_line(year: i32, site_name: &str) -> String {
    format!("© {year} {site_name}. All rights reserved.")
}

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let line = copyright_line(chrono::Local::now().year(), &config.site.name);

    rsx! {
        footer {
            class: "footer",
            p { "{line}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "OrphanConnect"),
            "© 2026 OrphanConnect. All rights reserved."
        );
    }
}
