//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub mod flows;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaFacebook, FaInstagram, FaTwitter};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod context;
pub use context::{use_services, use_site_config};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::{BrandMark, Navbar};

mod footer;
pub use footer::{copyright_line, Footer};

mod reveal;
pub use reveal::{visible_fraction, RevealLatch, RevealSection};

mod feature_card;
pub use feature_card::{stagger_delay, FeatureCard};

mod user_type_toggle;
pub use user_type_toggle::{UserTypeIcon, UserTypeToggle};
