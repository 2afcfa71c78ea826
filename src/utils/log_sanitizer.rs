//! Log sanitization utilities for masking sensitive data.
//!
//! Emails are personal data; handlers and services log them only through
//! `mask_email`.

/// Mask an email address for safe logging.
///
/// Shows only the first 3 characters of the local part (or fewer if it is
/// shorter) followed by asterisks and the domain. Counts characters, not
/// bytes, so multibyte input never splits a code point.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local_part, domain)) => format!("{}***@{}", visible_prefix(local_part), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(s: &str) -> String {
    s.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("user@example.com"), "use***@example.com");
        assert_eq!(mask_email("johndoe@test.org"), "joh***@test.org");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
        assert_eq!(mask_email("a@b.com"), "a***@b.com");
    }

    #[test]
    fn test_mask_email_invalid() {
        assert_eq!(mask_email("notanemail"), "not***");
    }

    #[test]
    fn test_mask_email_multibyte() {
        assert_eq!(mask_email("ünïcødé@example.com"), "ünï***@example.com");
    }
}
