use dioxus::prelude::*;

/// A styled `<input>`. Native attributes such as `r#type`, `required` and
/// `placeholder` pass through.
#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            "data-component": "input",
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            ..attributes,
        }
    }
}
