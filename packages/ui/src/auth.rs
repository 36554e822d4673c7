//! Session context and the logout control.

use api::Session;
use dioxus::prelude::*;

use crate::context::use_services;

/// Who is signed in, if anyone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Name for the navbar greeting.
    pub fn greeting(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|session| format!("Hi, {}", session.greeting_name()))
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that holds the session for everything below it.
/// Sessions live in memory only; a reload signs the visitor out.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to end the current session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    /// Called after the session is cleared.
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let mut auth_state = use_auth();
    let services = use_services();

    let onclick = move |_| {
        let services = services.clone();
        async move {
            let Some(session) = auth_state().session else {
                return;
            };
            if let Err(e) = services.auth.logout(&session).await {
                // The local session goes away regardless.
                tracing::warn!("Logout failed: {}", e);
            }
            auth_state.set(AuthState::default());
            if let Some(handler) = on_logout {
                handler.call(());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
