use dioxus::prelude::*;
use ui::components::Label;

mod shell;
pub use shell::PageShell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod not_found;
pub use not_found::NotFound;

/// A labelled form row.
#[component]
fn Field(id: String, label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "field",
            Label { r#for: "{id}", "{label}" }
            {children}
        }
    }
}
