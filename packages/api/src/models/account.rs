//! # Accounts and sessions
//!
//! [`AccountId`] is the opaque identifier handed back by a successful
//! registration. [`Session`] is what a successful login produces; it is safe to
//! keep in UI state because it never carries the password or its hash.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserType;

/// Identifier of a registered account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login input, passed as-is to the authentication service.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub user_type: UserType,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_type", &self.user_type)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub account_id: AccountId,
    pub user_type: UserType,
    pub email: String,
    pub display_name: String,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// First word of the display name, falling back to the email.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(display_name: &str) -> Session {
        Session {
            token: "t".to_string(),
            account_id: AccountId::new(),
            user_type: UserType::Volunteer,
            email: "asha@example.org".to_string(),
            display_name: display_name.to_string(),
            issued_at: Utc::now(),
        }
    }

    #[test]
    fn greeting_uses_first_name() {
        assert_eq!(session("Asha Rao").greeting_name(), "Asha");
        assert_eq!(session("   ").greeting_name(), "asha@example.org");
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            user_type: UserType::Organization,
            email: "home@example.org".to_string(),
            password: "hunter22".to_string(),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("hunter22"));
        assert!(printed.contains("home@example.org"));
    }
}
