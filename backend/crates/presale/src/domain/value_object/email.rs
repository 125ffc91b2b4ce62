//! Email Value Object
//!
//! Syntax check only; nothing here proves the mailbox exists.

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
///
/// The domain part is lower-cased; the local part keeps its case since it is
/// mailbox-specific.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> Result<Self, String> {
        let email = email.trim();

        if email.is_empty() {
            return Err("value is not a valid email address: empty".to_string());
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(format!(
                "value is not a valid email address: longer than {EMAIL_MAX_LENGTH} characters"
            ));
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err("value is not a valid email address: missing @".to_string());
        };

        if !Self::is_valid_local_part(local) || !Self::is_valid_domain(domain) {
            return Err("value is not a valid email address".to_string());
        }

        Ok(Self(format!("{}@{}", local, domain.to_ascii_lowercase())))
    }

    fn is_valid_local_part(local: &str) -> bool {
        !local.is_empty()
            && local.len() <= LOCAL_PART_MAX_LENGTH
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
            && !local.chars().any(|c| c.is_whitespace() || c == '@' || c.is_control())
    }

    fn is_valid_domain(domain: &str) -> bool {
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Every label non-empty and not hyphen-bounded
        domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  padded@example.com ").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@-example.com").is_err());
        assert!(Email::new("user@example..com").is_err());
        assert!(Email::new("us er@example.com").is_err());
        assert!(Email::new(".user@example.com").is_err());
    }

    #[test]
    fn test_email_domain_lowercased() {
        let email = Email::new("Investor@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Investor@example.com");
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(EMAIL_MAX_LENGTH));
        assert!(Email::new(&format!("{local}@{domain}")).is_err());
        assert!(Email::new(&format!("{}@example.com", "a".repeat(65))).is_err());
    }
}
