use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
        }
    }
}

/// A `<button>` with a visual variant. Any native button attribute
/// (`r#type`, `disabled`, `class`, ...) passes straight through.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        button {
            "data-component": "button",
            "data-variant": variant.as_str(),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_matches_stylesheet() {
        let css = include_str!("../../assets/ui.css");
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary] {
            let selector = format!("[data-variant=\"{}\"]", variant.as_str());
            assert!(css.contains(&selector), "missing {selector}");
        }
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
