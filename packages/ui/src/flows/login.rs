//! Login form: `Idle --submit--> Loading --success/failure--> Idle`.

use api::{validate, AuthError, AuthService, Credentials, Session, UserType, ValidationError};
use thiserror::Error;

/// Field values of the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    pub user_type: UserType,
    pub email: String,
    pub password: String,
}

impl LoginFormState {
    /// Validated credentials, or the first problem found.
    pub fn credentials(&self) -> Result<Credentials, ValidationError> {
        let email = validate::email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        Ok(Credentials {
            user_type: self.user_type,
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Loading,
}

impl LoginPhase {
    /// Move to `Loading`. Returns `false` if a submit is already in flight.
    pub fn begin(&mut self) -> bool {
        match self {
            LoginPhase::Idle => {
                *self = LoginPhase::Loading;
                true
            }
            LoginPhase::Loading => false,
        }
    }

    pub fn finish(&mut self) {
        *self = LoginPhase::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoginPhase::Loading)
    }
}

/// Text of the submit button.
pub fn submit_label(user_type: UserType, phase: LoginPhase) -> String {
    match phase {
        LoginPhase::Idle => format!("Login as {}", user_type.label()),
        LoginPhase::Loading => "Signing in...".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Validate the form, then authenticate. An invalid form never reaches the
/// service.
pub async fn submit_login(
    form: &LoginFormState,
    auth: &dyn AuthService,
) -> Result<Session, LoginError> {
    let credentials = form.credentials()?;
    Ok(auth.authenticate(credentials).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use api::AccountId;
    use async_trait::async_trait;

    /// Counts calls and accepts everything.
    #[derive(Default)]
    struct CountingAuth {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuthService for CountingAuth {
        async fn authenticate(&self, credentials: Credentials) -> Result<Session, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Session {
                token: "token".to_string(),
                account_id: AccountId::new(),
                user_type: credentials.user_type,
                email: credentials.email.clone(),
                display_name: credentials.email,
                issued_at: chrono::Utc::now(),
            })
        }

        async fn logout(&self, _session: &Session) -> Result<(), AuthError> {
            Ok(())
        }
    }

    fn filled(user_type: UserType) -> LoginFormState {
        LoginFormState {
            user_type,
            email: "asha@example.org".to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[test]
    fn test_label_follows_user_type() {
        assert_eq!(
            submit_label(UserType::Volunteer, LoginPhase::Idle),
            "Login as Volunteer"
        );
        assert_eq!(
            submit_label(UserType::Organization, LoginPhase::Idle),
            "Login as Organization"
        );
        assert_eq!(
            submit_label(UserType::Organization, LoginPhase::Loading),
            "Signing in..."
        );
    }

    #[test]
    fn test_phase_blocks_double_submit() {
        let mut phase = LoginPhase::default();
        assert!(phase.begin());
        assert!(phase.is_loading());
        assert!(!phase.begin());
        phase.finish();
        assert_eq!(phase, LoginPhase::Idle);
        assert!(phase.begin());
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_the_service() {
        let auth = CountingAuth::default();

        let mut no_email = filled(UserType::Volunteer);
        no_email.email.clear();
        assert_eq!(
            submit_login(&no_email, &auth).await,
            Err(LoginError::Invalid(ValidationError::MissingField("Email")))
        );

        let mut no_password = filled(UserType::Organization);
        no_password.password.clear();
        assert_eq!(
            submit_login(&no_password, &auth).await,
            Err(LoginError::Invalid(ValidationError::MissingField("Password")))
        );

        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_user_type_is_passed_along() {
        let auth = CountingAuth::default();
        let session = submit_login(&filled(UserType::Organization), &auth)
            .await
            .unwrap();
        assert_eq!(session.user_type, UserType::Organization);
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejected_credentials_surface_the_auth_error() {
        let backend = api::MemoryBackend::new(api::OtpConfig::default());
        let err = submit_login(&filled(UserType::Volunteer), &backend)
            .await
            .unwrap_err();
        assert_eq!(err, LoginError::Auth(AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid email or password");
    }
}
