use api::UserType;
use dioxus::prelude::*;

use crate::icons::{FaBuilding, FaUser};
use crate::Icon;

/// Icon for a user type.
#[component]
pub fn UserTypeIcon(user_type: UserType, #[props(default = 20)] size: u32) -> Element {
    match user_type {
        UserType::Volunteer => rsx! { Icon { icon: FaUser, width: size, height: size } },
        UserType::Organization => rsx! { Icon { icon: FaBuilding, width: size, height: size } },
    }
}

/// Segmented control choosing between volunteer and organization.
#[component]
pub fn UserTypeToggle(
    selected: UserType,
    onchange: EventHandler<UserType>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div {
            class: "user-type-toggle",
            role: "radiogroup",
            for user_type in UserType::ALL {
                button {
                    key: "{user_type}",
                    r#type: "button",
                    role: "radio",
                    "aria-checked": selected == user_type,
                    class: if selected == user_type { "user-type-toggle__option user-type-toggle__option--active" } else { "user-type-toggle__option" },
                    disabled,
                    onclick: move |_| onchange.call(user_type),
                    UserTypeIcon { user_type, size: 16 }
                    span { "{user_type}" }
                }
            }
        }
    }
}
