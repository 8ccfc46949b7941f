//! Email address syntax validation.
//!
//! A practical check, not the full RFC 5322 grammar: it accepts the
//! addresses people actually type into a mail client and rejects
//! obvious garbage. Internationalized addresses are out of scope.

use crate::error::{Error, Result};

/// Validates an email address.
///
/// Checks for a single `@` separating a non-empty local part and a
/// non-empty domain, rejects whitespace and control characters, and
/// applies basic dot and label rules to both sides.
///
/// # Errors
///
/// Returns [`Error::InvalidRecipient`] carrying the input string if it
/// fails any check.
pub fn validate(addr: &str) -> Result<()> {
    let invalid = || Error::InvalidRecipient(addr.to_string());

    if addr.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }

    let Some((local, domain)) = addr.split_once('@') else {
        return Err(invalid());
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    if has_bad_dots(local) || has_bad_dots(domain) {
        return Err(invalid());
    }

    for label in domain.split('.') {
        let hyphen_edge = label.starts_with('-') || label.ends_with('-');
        if hyphen_edge || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid());
        }
    }

    Ok(())
}

/// Returns whether the address passes [`validate`].
#[must_use]
pub fn is_valid(addr: &str) -> bool {
    validate(addr).is_ok()
}

/// Leading, trailing, or consecutive dots.
fn has_bad_dots(part: &str) -> bool {
    part.starts_with('.') || part.ends_with('.') || part.contains("..")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for addr in [
            "user@example.com",
            "a@b",
            "first.last@example.co.uk",
            "user+tag@example.com",
            "under_score@mail-host.example.com",
            "1234@numbers.example.com",
        ] {
            assert!(is_valid(addr), "expected valid: {addr}");
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for addr in [
            "",
            "not-an-email",
            "@example.com",
            "user@",
            "user@@example.com",
            "a@b@c",
            "user name@example.com",
            "user@exa mple.com",
            "user@example..com",
            ".user@example.com",
            "user.@example.com",
            "user@.example.com",
            "user@example.com.",
            "user@-example.com",
            "user@example-.com",
            "user@exam_ple.com",
            "user@example.com\n",
        ] {
            assert!(!is_valid(addr), "expected invalid: {addr}");
        }
    }

    #[test]
    fn test_error_carries_input() {
        let err = validate("not-an-email").unwrap_err();
        assert_eq!(err, Error::InvalidRecipient("not-an-email".to_string()));
    }
}
