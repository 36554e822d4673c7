//! Landing page: hero, mission, features, contact.

use dioxus::prelude::*;
use ui::icons::{
    FaEnvelope, FaFacebook, FaHandHoldingHeart, FaHeart, FaInstagram, FaPhone, FaTwitter,
    FaUsers,
};
use ui::{use_site_config, FeatureCard, Icon, RevealSection};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let config = use_site_config();
    let tagline = config.site.tagline;
    let contact = config.contact;
    let mailto = format!("mailto:{}", contact.email);
    let email = contact.email;
    let phone = contact.phone;
    let facebook = contact.facebook;
    let twitter = contact.twitter;
    let instagram = contact.instagram;

    rsx! {
        header {
            class: "hero",
            div {
                class: "hero__content",
                h1 {
                    class: "hero__title",
                    "Every Child "
                    span { class: "highlight", "Deserves" }
                    br {}
                    "a Champion."
                }
                p { class: "hero__subtitle", "{tagline}" }
                Link { to: Route::Signup {}, class: "cta-button hero__cta", "Become a Champion" }
            }
        }

        RevealSection {
            id: "mission",
            class: "section mission",
            div {
                h2 {
                    Icon { icon: FaHandHoldingHeart, width: 28, height: 28 }
                    " Our Mission"
                }
                p {
                    "We connect orphans with compassionate individuals, families, and communities to "
                    "provide love, education, and lifelong support."
                }
            }
        }

        RevealSection {
            id: "features",
            class: "section features",
            h2 { "What We Offer" }
            div {
                class: "features-grid",
                FeatureCard {
                    index: 0,
                    title: "Child Profiles",
                    description: "Browse verified profiles of children looking for care and mentorship.",
                    icon: rsx! { Icon { icon: FaUsers, width: 40, height: 40 } },
                }
                FeatureCard {
                    index: 1,
                    title: "Donor Connect",
                    description: "Support initiatives and directly fund the wellbeing of children.",
                    icon: rsx! { Icon { icon: FaHandHoldingHeart, width: 40, height: 40 } },
                }
                FeatureCard {
                    index: 2,
                    title: "Success Stories",
                    description: "Read uplifting stories of lives transformed through connection.",
                    icon: rsx! { Icon { icon: FaHeart, width: 40, height: 40 } },
                }
            }
        }

        RevealSection {
            id: "contact",
            class: "section contact",
            div {
                h2 { "Contact Us" }
                div {
                    class: "contact-info",
                    p {
                        Icon { icon: FaEnvelope, width: 18, height: 18 }
                        a { href: "{mailto}", " {email}" }
                    }
                    p {
                        Icon { icon: FaPhone, width: 18, height: 18 }
                        " {phone}"
                    }
                }
                div {
                    class: "social-links",
                    a {
                        class: "social-icon",
                        href: "{facebook}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "Facebook",
                        Icon { icon: FaFacebook, width: 24, height: 24 }
                    }
                    a {
                        class: "social-icon",
                        href: "{twitter}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "Twitter",
                        Icon { icon: FaTwitter, width: 24, height: 24 }
                    }
                    a {
                        class: "social-icon",
                        href: "{instagram}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "Instagram",
                        Icon { icon: FaInstagram, width: 24, height: 24 }
                    }
                }
            }
        }
    }
}
