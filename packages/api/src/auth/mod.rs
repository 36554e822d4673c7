//! Service interfaces for sign-in, phone verification and registration.
//!
//! The views only ever talk to these traits. The workspace ships one
//! implementation, [`crate::MemoryBackend`]; a networked backend plugs in by
//! implementing the same traits and handing them to [`crate::Services`].

mod otp;
mod password;

pub use otp::{generate_code, OtpCheck, OtpLedger};
pub use password::{hash_password, verify_password};

use async_trait::async_trait;

use crate::error::{AuthError, OtpError, ValidationError};
use crate::models::{
    AccountId, Credentials, OrganizationRegistration, Registration, Session,
    VolunteerRegistration,
};

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session.
    async fn authenticate(&self, credentials: Credentials) -> Result<Session, AuthError>;

    /// Invalidate a session.
    async fn logout(&self, session: &Session) -> Result<(), AuthError>;
}

#[async_trait]
pub trait OtpService: Send + Sync {
    /// Issue a one-time code for `phone` and deliver it.
    async fn request_otp(&self, phone: &str) -> Result<(), OtpError>;

    /// Check `code` against the last code issued for `phone`. A successful
    /// check marks the phone as verified.
    async fn verify_otp(&self, phone: &str, code: &str) -> bool;
}

#[async_trait]
pub trait RegistrationService: Send + Sync {
    async fn register_volunteer(
        &self,
        fields: VolunteerRegistration,
    ) -> Result<AccountId, ValidationError>;

    async fn register_organization(
        &self,
        fields: OrganizationRegistration,
    ) -> Result<AccountId, ValidationError>;

    /// Dispatch on the account type.
    async fn register(&self, registration: Registration) -> Result<AccountId, ValidationError> {
        match registration {
            Registration::Volunteer(fields) => self.register_volunteer(fields).await,
            Registration::Organization(fields) => self.register_organization(fields).await,
        }
    }
}
