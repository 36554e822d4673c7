//! Field-level input checks shared by the UI flows and the backend.
//!
//! Each checker returns the normalised value on success so callers never keep
//! the raw input around after validation.

use crate::error::ValidationError;

/// Minimum length of a new account password.
pub const MIN_PASSWORD_LEN: usize = 8;

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Non-empty after trimming.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Lowercased email with a non-empty local part and domain.
pub fn email(value: &str) -> Result<String, ValidationError> {
    let email = required("Email", value)?.to_lowercase();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

/// Digits with an optional leading `+`. Common separators are stripped.
pub fn phone(value: &str) -> Result<String, ValidationError> {
    let raw = required("Phone number", value)?;
    let (plus, rest) = match raw.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", raw.as_str()),
    };

    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(ValidationError::InvalidPhone),
        }
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(format!("{plus}{digits}"))
}

/// Password for a new account. Not trimmed.
pub fn new_password(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField("Password"));
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(value.to_string())
}

/// Strictly positive whole number.
pub fn count(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    let raw = required(field, value)?;
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(ValidationError::InvalidNumber(field)),
        Ok(n) => Ok(n),
    }
}

/// Non-negative whole currency amount.
pub fn amount(field: &'static str, value: &str) -> Result<u64, ValidationError> {
    required(field, value)?
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidNumber(field))
}

/// Comma-separated list; blank entries are dropped, at least one must remain.
pub fn list(field: &'static str, value: &str) -> Result<Vec<String>, ValidationError> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("Name", "  Asha ").unwrap(), "Asha");
        assert_eq!(
            required("Name", "   "),
            Err(ValidationError::MissingField("Name"))
        );
    }

    #[test]
    fn test_email() {
        assert_eq!(email(" A@X.com ").unwrap(), "a@x.com");
        assert_eq!(email(""), Err(ValidationError::MissingField("Email")));
        for bad in ["asha", "@x.com", "a@", "a@@x.com", "a b@x.com", "a@.com", "a@x."] {
            assert_eq!(email(bad), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_phone_normalisation() {
        assert_eq!(phone("9999999999").unwrap(), "9999999999");
        assert_eq!(phone("+91 98765 43210").unwrap(), "+919876543210");
        assert_eq!(phone("(555) 123-4567").unwrap(), "5551234567");
    }

    #[test]
    fn test_phone_rejects_garbage() {
        assert_eq!(phone(""), Err(ValidationError::MissingField("Phone number")));
        assert_eq!(phone("12345"), Err(ValidationError::InvalidPhone));
        assert_eq!(phone("99999abc99"), Err(ValidationError::InvalidPhone));
        assert_eq!(phone("1234567890123456"), Err(ValidationError::InvalidPhone));
        assert_eq!(phone("++9999999999"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_new_password() {
        assert!(new_password("longenough").is_ok());
        assert_eq!(
            new_password("short"),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(
            new_password(""),
            Err(ValidationError::MissingField("Password"))
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(count("Head count", "25").unwrap(), 25);
        assert_eq!(
            count("Head count", "0"),
            Err(ValidationError::InvalidNumber("Head count"))
        );
        assert_eq!(
            count("Head count", "-3"),
            Err(ValidationError::InvalidNumber("Head count"))
        );
        assert_eq!(amount("Daily expense", "0").unwrap(), 0);
        assert_eq!(
            amount("Daily expense", "12.5"),
            Err(ValidationError::InvalidNumber("Daily expense"))
        );
    }

    #[test]
    fn test_list() {
        assert_eq!(
            list("Skills", "teaching, , music ,").unwrap(),
            vec!["teaching".to_string(), "music".to_string()]
        );
        assert_eq!(
            list("Skills", " , "),
            Err(ValidationError::MissingField("Skills"))
        );
    }
}
