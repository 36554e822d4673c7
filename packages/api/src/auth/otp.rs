//! # One-time code bookkeeping
//!
//! [`OtpLedger`] remembers the last code issued per (normalised) phone number
//! and enforces the policy from [`OtpConfig`]:
//!
//! - a code expires `ttl_secs` after it was issued;
//! - after `max_attempts` wrong guesses the code is discarded;
//! - a new code for the same phone is refused for `resend_cooldown_secs`;
//! - a successful check consumes the code.
//!
//! Time and randomness are passed in, so the ledger itself is deterministic.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::OtpConfig;
use crate::error::OtpError;

#[derive(Debug, Clone)]
struct PendingCode {
    code: String,
    issued_at: DateTime<Utc>,
    attempts: u32,
}

/// Outcome of checking a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpCheck {
    Verified,
    Mismatch { attempts_left: u32 },
    Expired,
    /// Too many wrong guesses; the code has been discarded.
    Locked,
    NotRequested,
}

#[derive(Debug, Default)]
pub struct OtpLedger {
    pending: HashMap<String, PendingCode>,
}

impl OtpLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh code for `phone`, replacing any previous one.
    pub fn issue<R: Rng>(
        &mut self,
        phone: &str,
        now: DateTime<Utc>,
        config: &OtpConfig,
        rng: &mut R,
    ) -> Result<String, OtpError> {
        if let Some(previous) = self.pending.get(phone) {
            match deadline(previous.issued_at, config.resend_cooldown_secs) {
                Some(ready_at) if now < ready_at => {
                    // Rounded up to whole seconds.
                    let retry_in_secs = ((ready_at - now).num_milliseconds() + 999) / 1000;
                    return Err(OtpError::TooSoon { retry_in_secs });
                }
                Some(_) => {}
                None => {
                    return Err(OtpError::TooSoon {
                        retry_in_secs: config.resend_cooldown_secs,
                    })
                }
            }
        }

        let code = generate_code(rng, config.code_length);
        self.pending.insert(
            phone.to_string(),
            PendingCode {
                code: code.clone(),
                issued_at: now,
                attempts: 0,
            },
        );
        Ok(code)
    }

    /// Check `code` for `phone`.
    pub fn verify(
        &mut self,
        phone: &str,
        code: &str,
        now: DateTime<Utc>,
        config: &OtpConfig,
    ) -> OtpCheck {
        let Some(pending) = self.pending.get_mut(phone) else {
            return OtpCheck::NotRequested;
        };

        let expired = deadline(pending.issued_at, config.ttl_secs).is_some_and(|at| now >= at);
        if expired {
            self.pending.remove(phone);
            return OtpCheck::Expired;
        }

        if pending.code == code.trim() {
            self.pending.remove(phone);
            return OtpCheck::Verified;
        }

        pending.attempts += 1;
        if pending.attempts >= config.max_attempts {
            self.pending.remove(phone);
            return OtpCheck::Locked;
        }
        OtpCheck::Mismatch {
            attempts_left: config.max_attempts - pending.attempts,
        }
    }

    pub fn is_pending(&self, phone: &str) -> bool {
        self.pending.contains_key(phone)
    }
}

/// `start + secs`, or `None` when that lies beyond the representable range.
/// Non-positive windows end at `start`.
fn deadline(start: DateTime<Utc>, secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return Some(start);
    }
    Duration::try_seconds(secs).and_then(|window| start.checked_add_signed(window))
}

/// Random numeric code of `length` digits. Leading zeros are kept.
pub fn generate_code<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
