//! Login page: user-type toggle plus email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::flows::{submit_label, submit_login, LoginFormState, LoginPhase};
use ui::{use_auth, use_services, use_site_config, AuthState, UserTypeIcon, UserTypeToggle};

use super::Field;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let site_name = use_site_config().site.name;
    let mut form = use_signal(LoginFormState::default);
    let mut phase = use_signal(LoginPhase::default);
    let mut error = use_signal(|| Option::<String>::None);

    // Signed in, including right after a successful submit: go home
    use_effect(move || {
        if auth().is_signed_in() {
            nav.replace(Route::Home {});
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !phase.write().begin() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            error.set(None);
            let current = form();
            match submit_login(&current, services.auth.as_ref()).await {
                Ok(session) => {
                    tracing::info!(user_type = %session.user_type, "signed in");
                    form.set(LoginFormState::default());
                    auth.set(AuthState {
                        session: Some(session),
                    });
                    phase.write().finish();
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                    phase.write().finish();
                }
            }
        });
    };

    let LoginFormState {
        user_type,
        email,
        password,
    } = form();
    let loading = phase().is_loading();
    let label = submit_label(user_type, phase());
    let tagline = user_type.tagline();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-card__header",
                    UserTypeIcon { user_type, size: 36 }
                    h1 { "Welcome back" }
                    p { "{tagline}" }
                }

                UserTypeToggle {
                    selected: user_type,
                    disabled: loading,
                    onchange: move |choice| form.write().user_type = choice,
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    Field {
                        id: "login-email",
                        label: "Email",
                        Input {
                            id: "login-email",
                            r#type: "email",
                            required: true,
                            autocomplete: "email",
                            placeholder: "you@example.org",
                            disabled: loading,
                            value: email,
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }

                    Field {
                        id: "login-password",
                        label: "Password",
                        Input {
                            id: "login-password",
                            r#type: "password",
                            required: true,
                            autocomplete: "current-password",
                            disabled: loading,
                            value: password,
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "auth-form__submit",
                        r#type: "submit",
                        disabled: loading,
                        "{label}"
                    }
                }

                if let Some(err) = error() {
                    div {
                        class: "form-error",
                        role: "alert",
                        "{err}"
                    }
                }

                p {
                    class: "auth-card__footer",
                    "New to {site_name}? "
                    Link { to: Route::Signup {}, "Create an account" }
                }
            }
        }
    }
}
