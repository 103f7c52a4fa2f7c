//! Syntactic email validation.
//!
//! The check is a single anchored regular expression. It says nothing about
//! deliverability and will reject some unusual but valid addresses.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Returns `true` when the whole of `email` matches the address pattern.
///
/// The local part may use letters, digits and `._%+-`; the domain may use
/// letters, digits, `.` and `-`, and must end in a dot followed by at least
/// two letters.
///
/// # Examples
///
/// ```
/// use sample_kit::validate_email;
///
/// assert!(validate_email("test@example.com"));
/// assert!(!validate_email("invalid-email"));
/// assert!(!validate_email("a@b.c"));
/// ```
#[must_use]
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[cfg(test)]
mod tests {
    //! Covers accepted and rejected address shapes.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("test@example.com")]
    #[case("john.doe@example.com")]
    #[case("first_last+tag@sub.domain.org")]
    #[case("percent%user@host-name.io")]
    #[case("a@b.co")]
    #[case("UPPER@EXAMPLE.COM")]
    #[case("dots..inside@example.com")]
    fn accepts_valid_addresses(#[case] email: &str) {
        assert!(validate_email(email), "expected {email} to be accepted");
    }

    #[rstest]
    #[case("invalid-email")]
    #[case("a@b.c")] // single-letter TLD
    #[case("")]
    #[case("@example.com")] // empty local part
    #[case("user@")] // empty domain
    #[case("user@example")] // no TLD
    #[case("user@example.c0m")] // digit in TLD
    #[case("user name@example.com")] // space
    #[case("user@@example.com")]
    #[case(" test@example.com")] // leading space
    #[case("test@example.com\n")] // trailing newline
    fn rejects_invalid_addresses(#[case] email: &str) {
        assert!(!validate_email(email), "expected {email:?} to be rejected");
    }
}
