//! # Site configuration: `site.toml`
//!
//! Defines the TOML file embedded into the web binary
//! (filename: [`SiteConfig::filename`] = `"site.toml"`). It carries the
//! organisation's public details and the tunables of the signup and landing
//! flows.
//!
//! ## Structure
//!
//! ```toml
//! [site]
//! name = "OrphanConnect"
//! tagline = "Be the reason a child believes in love, hope, and a brighter tomorrow."
//!
//! [contact]
//! email = "support@orphanconnect.org"
//! phone = "+91 98765 43210"
//! facebook = "https://facebook.com/orphanconnect"
//! twitter = "https://twitter.com/orphanconnect"
//! instagram = "https://instagram.com/orphanconnect"
//!
//! [otp]
//! code_length = 6
//! ttl_secs = 300
//! max_attempts = 5
//! resend_cooldown_secs = 30
//!
//! [reveal]
//! threshold = 0.1
//! ```
//!
//! Every field has a serde default, so a missing or partial file is
//! equivalent to the defaults above.

use serde::{Deserialize, Serialize};

/// Shortest code lifetime accepted from `site.toml`.
pub const MIN_OTP_TTL_SECS: i64 = 30;
/// Longest code lifetime or resend cooldown accepted from `site.toml` (one day).
pub const MAX_OTP_WINDOW_SECS: i64 = 86_400;

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub otp: OtpConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "OrphanConnect".to_string(),
            tagline: "Be the reason a child believes in love, hope, and a brighter tomorrow."
                .to_string(),
        }
    }
}

/// Public contact details shown in the contact section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "support@orphanconnect.org".to_string(),
            phone: "+91 98765 43210".to_string(),
            facebook: "https://facebook.com/orphanconnect".to_string(),
            twitter: "https://twitter.com/orphanconnect".to_string(),
            instagram: "https://instagram.com/orphanconnect".to_string(),
        }
    }
}

/// One-time code policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtpConfig {
    /// Number of digits in a code.
    pub code_length: usize,
    /// Seconds a code stays valid.
    pub ttl_secs: i64,
    /// Wrong guesses allowed before the code is discarded.
    pub max_attempts: u32,
    /// Minimum seconds between two codes for the same phone.
    pub resend_cooldown_secs: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            ttl_secs: 300,
            max_attempts: 5,
            resend_cooldown_secs: 30,
        }
    }
}

/// Scroll reveal tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a section that must be on screen before it animates in.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.reveal.threshold = config.reveal.threshold.clamp(0.0, 1.0);
        config.otp.code_length = config.otp.code_length.clamp(4, 10);
        config.otp.ttl_secs = config.otp.ttl_secs.clamp(MIN_OTP_TTL_SECS, MAX_OTP_WINDOW_SECS);
        config.otp.resend_cooldown_secs = config.otp.resend_cooldown_secs.clamp(0, MAX_OTP_WINDOW_SECS);
        config.otp.max_attempts = config.otp.max_attempts.max(1);
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.name, "OrphanConnect");
        assert_eq!(config.otp.code_length, 6);
        assert_eq!(config.reveal.threshold, 0.1);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [contact]
            email = "hello@example.org"

            [otp]
            ttl_secs = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.contact.email, "hello@example.org");
        assert_eq!(config.contact.phone, "+91 98765 43210");
        assert_eq!(config.otp.ttl_secs, 60);
        assert_eq!(config.otp.max_attempts, 5);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let config = SiteConfig::from_toml(
            r#"
            [otp]
            code_length = 2

            [reveal]
            threshold = 3.5
            "#,
        )
        .unwrap();
        assert_eq!(config.otp.code_length, 4);
        assert_eq!(config.reveal.threshold, 1.0);
    }

    #[test]
    fn test_otp_windows_are_clamped() {
        let config = SiteConfig::from_toml(
            "[otp]\nttl_secs = 9223372036854775807\nresend_cooldown_secs = -10\nmax_attempts = 0",
        )
        .unwrap();
        assert_eq!(config.otp.ttl_secs, MAX_OTP_WINDOW_SECS);
        assert_eq!(config.otp.resend_cooldown_secs, 0);
        assert_eq!(config.otp.max_attempts, 1);

        let config = SiteConfig::from_toml("[otp]\nttl_secs = -1").unwrap();
        assert_eq!(config.otp.ttl_secs, MIN_OTP_TTL_SECS);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(SiteConfig::from_toml("[otp\ncode_length = ").is_err());
        assert!(SiteConfig::from_toml("[otp]\ncode_length = \"six\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = SiteConfig::default();
        config.site.name = "Little Lights".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }
}
