use dioxus::prelude::*;

/// Entrance delay for the `index`th card, `index * 0.2s`.
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.2)
}

/// Icon, title and blurb in a card. Cards fade in one after another once
/// their [`RevealSection`](crate::RevealSection) is visible.
#[component]
pub fn FeatureCard(
    icon: Element,
    title: String,
    description: String,
    #[props(default)] index: usize,
) -> Element {
    let delay = stagger_delay(index);

    rsx! {
        div {
            class: "feature-card",
            style: "transition-delay: {delay}",
            div { class: "feature-card__icon", {icon} }
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(1), "0.2s");
        assert_eq!(stagger_delay(2), "0.4s");
    }
}
