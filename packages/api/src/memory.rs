//! # In-memory backend
//!
//! [`MemoryBackend`] implements every service trait against state that lives
//! only as long as the page. It behaves like a real backend as far as the UI
//! can tell:
//!
//! - registration re-validates the payload, refuses duplicate emails and
//!   refuses phones that have not passed [`OtpService::verify_otp`];
//! - passwords are stored as Argon2id hashes;
//! - authentication checks email, account type and password and returns the
//!   same error for every mismatch;
//! - one-time codes follow the [`OtpLedger`] policy. Delivery is a log line.
//!
//! All state sits behind one `Mutex`; no guard is held across an `.await`.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::{
    hash_password, verify_password, AuthService, OtpCheck, OtpLedger, OtpService,
    RegistrationService,
};
use crate::config::OtpConfig;
use crate::error::{AuthError, OtpError, ValidationError};
use crate::models::{
    AccountId, Credentials, OrganizationRegistration, Registration, Session, UserType,
    VolunteerRegistration,
};
use crate::validate;

#[derive(Debug)]
struct Account {
    id: AccountId,
    user_type: UserType,
    display_name: String,
    password_hash: String,
    profile: Registration,
}

#[derive(Debug, Default)]
struct BackendState {
    /// Keyed by lowercase email.
    accounts: HashMap<String, Account>,
    otps: OtpLedger,
    verified_phones: HashSet<String>,
    /// Session token to account.
    sessions: HashMap<String, AccountId>,
    /// Last code "delivered" to each phone.
    outbox: HashMap<String, String>,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: Mutex<BackendState>,
    config: OtpConfig,
}

impl MemoryBackend {
    pub fn new(config: OtpConfig) -> Self {
        Self {
            state: Mutex::new(BackendState::default()),
            config,
        }
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.lock().accounts.len()
    }

    pub fn session_count(&self) -> usize {
        self.lock().sessions.len()
    }

    /// Stored signup details for `email`.
    pub fn registration(&self, email: &str) -> Option<Registration> {
        self.lock()
            .accounts
            .get(&email.trim().to_lowercase())
            .map(|account| account.profile.clone())
    }

    /// The last code sent to `phone`, as the recipient would read it.
    pub fn delivered_code(&self, phone: &str) -> Option<String> {
        let phone = validate::phone(phone).ok()?;
        self.lock().outbox.get(&phone).cloned()
    }

    fn issue_code(&self, phone: &str) -> Result<String, OtpError> {
        let phone = validate::phone(phone).map_err(|_| OtpError::InvalidPhone)?;
        let mut state = self.lock();
        let code = state
            .otps
            .issue(&phone, Utc::now(), &self.config, &mut rand::thread_rng())?;
        // The verified flag belongs to the previous code.
        state.verified_phones.remove(&phone);
        state.outbox.insert(phone, code.clone());
        Ok(code)
    }

    fn check_code(&self, phone: &str, code: &str) -> bool {
        let Ok(phone) = validate::phone(phone) else {
            warn!("OTP check for malformed phone number");
            return false;
        };
        let mut state = self.lock();
        match state.otps.verify(&phone, code, Utc::now(), &self.config) {
            OtpCheck::Verified => {
                state.verified_phones.insert(phone.clone());
                info!(phone = %phone, "phone verified");
                true
            }
            OtpCheck::Mismatch { attempts_left } => {
                warn!(phone = %phone, attempts_left, "wrong one-time code");
                false
            }
            other => {
                warn!(phone = %phone, outcome = ?other, "one-time code rejected");
                false
            }
        }
    }

    fn create_account(&self, registration: Registration) -> Result<AccountId, ValidationError> {
        let registration = registration.validate()?;
        let contact = registration.contact();

        // Hashed outside the lock.
        let password_hash = hash_password(&contact.password)
            .map_err(|e| ValidationError::Unavailable(e.to_string()))?;

        let mut state = self.lock();
        if state.accounts.contains_key(&contact.email) {
            warn!(email = %contact.email, "registration for existing email");
            return Err(ValidationError::EmailTaken);
        }
        if !state.verified_phones.remove(&contact.phone) {
            warn!(phone = %contact.phone, "registration with unverified phone");
            return Err(ValidationError::PhoneNotVerified);
        }

        let account = Account {
            id: AccountId::new(),
            user_type: registration.user_type(),
            display_name: registration.display_name().to_string(),
            password_hash,
            profile: registration.clone(),
        };
        let id = account.id;
        info!(account_id = %id, user_type = %account.user_type, "account registered");
        state.accounts.insert(contact.email.clone(), account);
        Ok(id)
    }

    fn open_session(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let email = credentials.email.trim().to_lowercase();

        let (account_id, user_type, display_name, password_hash) = {
            let state = self.lock();
            let Some(account) = state.accounts.get(&email) else {
                warn!(email = %email, "login for unknown email");
                return Err(AuthError::InvalidCredentials);
            };
            (
                account.id,
                account.user_type,
                account.display_name.clone(),
                account.password_hash.clone(),
            )
        };

        if user_type != credentials.user_type {
            warn!(email = %email, "login with wrong account type");
            return Err(AuthError::InvalidCredentials);
        }

        let valid = verify_password(&credentials.password, &password_hash)
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;
        if !valid {
            warn!(email = %email, "login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            token: Uuid::new_v4().to_string(),
            account_id,
            user_type,
            email,
            display_name,
            issued_at: Utc::now(),
        };
        self.lock()
            .sessions
            .insert(session.token.clone(), session.account_id);
        info!(account_id = %account_id, "session opened");
        Ok(session)
    }

    fn close_session(&self, session: &Session) -> Result<(), AuthError> {
        match self.lock().sessions.remove(&session.token) {
            Some(_) => {
                info!(account_id = %session.account_id, "session closed");
                Ok(())
            }
            None => Err(AuthError::UnknownSession),
        }
    }
}

#[async_trait]
impl AuthService for MemoryBackend {
    async fn authenticate(&self, credentials: Credentials) -> Result<Session, AuthError> {
        self.open_session(&credentials)
    }

    async fn logout(&self, session: &Session) -> Result<(), AuthError> {
        self.close_session(session)
    }
}

#[async_trait]
impl OtpService for MemoryBackend {
    async fn request_otp(&self, phone: &str) -> Result<(), OtpError> {
        let code = self.issue_code(phone)?;
        // Stand-in for SMS delivery.
        info!(phone = %phone, code = %code, "one-time code issued");
        debug!(ttl_secs = self.config.ttl_secs, "code validity");
        Ok(())
    }

    async fn verify_otp(&self, phone: &str, code: &str) -> bool {
        self.check_code(phone, code)
    }
}

#[async_trait]
impl RegistrationService for MemoryBackend {
    async fn register_volunteer(
        &self,
        fields: VolunteerRegistration,
    ) -> Result<AccountId, ValidationError> {
        self.create_account(Registration::Volunteer(fields))
    }

    async fn register_organization(
        &self,
        fields: OrganizationRegistration,
    ) -> Result<AccountId, ValidationError> {
        self.create_account(Registration::Organization(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, ContactDetails, PlaceType};

    const PHONE: &str = "+91 98765 43210";

    fn contact(email: &str) -> ContactDetails {
        ContactDetails {
            full_name: "Asha Rao".to_string(),
            email: email.to_string(),
            phone: PHONE.to_string(),
            password: "correct horse".to_string(),
        }
    }

    fn volunteer(email: &str) -> VolunteerRegistration {
        VolunteerRegistration {
            contact: contact(email),
            location: "Pune".to_string(),
            skills: vec!["teaching".to_string()],
            availability: Availability::Weekends,
        }
    }

    fn organization(email: &str) -> OrganizationRegistration {
        OrganizationRegistration {
            contact: contact(email),
            place_name: "Sunrise Home".to_string(),
            location: "Chennai".to_string(),
            govt_id: "TN-1234".to_string(),
            head_count: 40,
            place_type: PlaceType::Orphanage,
            is_govt_aided: true,
            daily_expense: 4000,
        }
    }

    fn verify_phone(backend: &MemoryBackend, phone: &str) {
        let code = backend.issue_code(phone).unwrap();
        assert!(backend.check_code(phone, &code));
    }

    #[tokio::test]
    async fn test_request_otp_delivers_code() {
        let backend = MemoryBackend::new(OtpConfig::default());
        assert_eq!(backend.delivered_code(PHONE), None);

        backend.request_otp(PHONE).await.unwrap();
        let code = backend.delivered_code("+91-98765-43210").unwrap();
        assert_eq!(code.len(), 6);
        assert!(backend.verify_otp(PHONE, &code).await);
    }

    #[tokio::test]
    async fn test_extreme_site_config_keeps_codes_working() {
        let site = crate::SiteConfig::from_toml("[otp]\nttl_secs = 9223372036854775807").unwrap();
        let backend = MemoryBackend::new(site.otp);

        backend.request_otp(PHONE).await.unwrap();
        let code = backend.delivered_code(PHONE).unwrap();
        assert!(backend.verify_otp(PHONE, &code).await);
    }

    #[tokio::test]
    async fn test_register_requires_verified_phone() {
        let backend = MemoryBackend::new(OtpConfig::default());
        assert_eq!(
            backend.register_volunteer(volunteer("asha@example.org")).await,
            Err(ValidationError::PhoneNotVerified)
        );

        verify_phone(&backend, PHONE);
        assert!(backend
            .register_volunteer(volunteer("asha@example.org"))
            .await
            .is_ok());
        assert_eq!(backend.account_count(), 1);

        let Some(Registration::Volunteer(stored)) = backend.registration("Asha@example.org") else {
            panic!("volunteer registration not stored");
        };
        assert_eq!(stored.contact.phone, "+919876543210");
        assert_eq!(stored.skills, vec!["teaching".to_string()]);
    }

    #[tokio::test]
    async fn test_verification_is_consumed_by_registration() {
        let backend = MemoryBackend::new(OtpConfig::default());
        verify_phone(&backend, PHONE);
        backend
            .register_volunteer(volunteer("first@example.org"))
            .await
            .unwrap();
        assert_eq!(
            backend.register_volunteer(volunteer("second@example.org")).await,
            Err(ValidationError::PhoneNotVerified)
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let backend = MemoryBackend::new(OtpConfig::default());

        verify_phone(&backend, PHONE);
        backend
            .register_volunteer(volunteer("asha@example.org"))
            .await
            .unwrap();

        verify_phone(&backend, PHONE);
        assert_eq!(
            backend
                .register_organization(organization("ASHA@example.org"))
                .await,
            Err(ValidationError::EmailTaken)
        );
    }

    #[tokio::test]
    async fn test_registration_is_revalidated() {
        let backend = MemoryBackend::new(OtpConfig::default());
        verify_phone(&backend, PHONE);
        let mut fields = organization("home@example.org");
        fields.govt_id = "   ".to_string();
        assert_eq!(
            backend.register_organization(fields).await,
            Err(ValidationError::MissingField("Government ID"))
        );
        assert_eq!(backend.account_count(), 0);
    }

    #[tokio::test]
    async fn test_request_otp_rejects_bad_phone() {
        let backend = MemoryBackend::new(OtpConfig::default());
        assert_eq!(
            backend.request_otp("not a phone").await,
            Err(OtpError::InvalidPhone)
        );
        assert!(backend.request_otp("9999999999").await.is_ok());
        assert!(matches!(
            backend.request_otp("99999 99999").await,
            Err(OtpError::TooSoon { .. })
        ));
    }

    #[tokio::test]
    async fn test_verify_otp_rejects_wrong_code() {
        let backend = MemoryBackend::new(OtpConfig::default());
        let code = backend.issue_code(PHONE).unwrap();
        let wrong = if code == "000000" { "111111" } else { "000000" };
        assert!(!backend.verify_otp(PHONE, wrong).await);
        assert!(!backend.verify_otp("12", &code).await);
        assert!(backend.verify_otp("+919876543210", &code).await);
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let backend = MemoryBackend::new(OtpConfig::default());
        verify_phone(&backend, PHONE);
        let id = backend
            .register_organization(organization("home@example.org"))
            .await
            .unwrap();

        let session = backend
            .authenticate(Credentials {
                user_type: UserType::Organization,
                email: " Home@Example.org ".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.account_id, id);
        assert_eq!(session.display_name, "Sunrise Home");
        assert_eq!(session.email, "home@example.org");
        assert_eq!(backend.session_count(), 1);

        backend.logout(&session).await.unwrap();
        assert_eq!(backend.session_count(), 0);
        assert_eq!(
            backend.logout(&session).await,
            Err(AuthError::UnknownSession)
        );
    }

    #[tokio::test]
    async fn test_login_failures_look_alike() {
        let backend = MemoryBackend::new(OtpConfig::default());
        verify_phone(&backend, PHONE);
        backend
            .register_volunteer(volunteer("asha@example.org"))
            .await
            .unwrap();

        let attempt = |user_type, email: &str, password: &str| Credentials {
            user_type,
            email: email.to_string(),
            password: password.to_string(),
        };

        for credentials in [
            attempt(UserType::Volunteer, "nobody@example.org", "correct horse"),
            attempt(UserType::Volunteer, "asha@example.org", "wrong password"),
            attempt(UserType::Organization, "asha@example.org", "correct horse"),
        ] {
            assert_eq!(
                backend.authenticate(credentials).await,
                Err(AuthError::InvalidCredentials)
            );
        }
        assert_eq!(backend.session_count(), 0);
    }
}
