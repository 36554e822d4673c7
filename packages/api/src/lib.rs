//! # API crate: the service boundary for OrphanConnect
//!
//! Every operation the pages need from "the outside world" is declared here as
//! a trait, together with the data it exchanges. The UI receives the services
//! as one [`Services`] bundle through Dioxus context and never names a
//! concrete implementation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `AuthService`, `OtpService`, `RegistrationService` traits, Argon2id password hashing, the one-time code ledger |
//! | [`config`] | `site.toml` parsing (`SiteConfig`) |
//! | [`error`] | `AuthError`, `OtpError`, `ValidationError` |
//! | [`memory`] | `MemoryBackend`, the in-process implementation of every trait |
//! | [`models`] | user types, credentials, sessions, registration payloads |
//! | [`validate`] | field-level checks shared by the forms and the backend |
//!
//! ## Operations
//!
//! - **Authentication**: `authenticate`, `logout`
//! - **Phone verification**: `request_otp`, `verify_otp`
//! - **Registration**: `register_volunteer`, `register_organization`, `register`

use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod validate;

pub use auth::{AuthService, OtpService, RegistrationService};
pub use config::{OtpConfig, SiteConfig};
pub use error::{AuthError, OtpError, ValidationError};
pub use memory::MemoryBackend;
pub use models::{
    AccountId, Availability, ContactDetails, Credentials, OrganizationRegistration, PlaceType,
    Registration, Session, UserType, VolunteerRegistration,
};

/// The set of services injected into the views.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub otp: Arc<dyn OtpService>,
    pub registration: Arc<dyn RegistrationService>,
}

impl Services {
    /// All three services backed by one [`MemoryBackend`].
    pub fn in_memory(config: OtpConfig) -> Self {
        Self::from_backend(Arc::new(MemoryBackend::new(config)))
    }

    /// All three services backed by the same object.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: AuthService + OtpService + RegistrationService + 'static,
    {
        Self {
            auth: backend.clone(),
            otp: backend.clone(),
            registration: backend,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundle_shares_one_backend() {
        let backend = Arc::new(MemoryBackend::new(OtpConfig::default()));
        let services = Services::from_backend(backend.clone());

        assert!(services.otp.request_otp("9999999999").await.is_ok());
        assert!(matches!(
            services.otp.request_otp("9999999999").await,
            Err(OtpError::TooSoon { .. })
        ));
        assert_eq!(Arc::strong_count(&backend), 4);
    }
}
