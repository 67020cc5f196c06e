use crate::domain::errors::{DomainError, DomainResult};

/// Validate an address and return it trimmed and lowercased.
pub fn validate_and_normalize_email(email: &str) -> DomainResult<String> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(DomainError::ValidationError(
            "Please enter a valid email address".to_string(),
        ));
    }

    // The parser accepts dotless domains; accounts need a real TLD
    let has_tld = trimmed
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false);
    if !has_tld {
        return Err(DomainError::ValidationError(
            "Email domain must include a TLD (e.g., .com, .org)".to_string(),
        ));
    }

    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_addresses_are_valid() {
        for email in [
            "admin@medlecture.com",
            "student@medlecture.com",
            "instructor@medlecture.com",
        ] {
            assert_eq!(validate_and_normalize_email(email).unwrap(), email);
        }
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(
            validate_and_normalize_email("  New.Student@MedLecture.COM ").unwrap(),
            "new.student@medlecture.com"
        );
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(validate_and_normalize_email("student.medlecture.com").is_err());
        assert!(validate_and_normalize_email("student@").is_err());
        assert!(validate_and_normalize_email("@medlecture.com").is_err());
        assert!(validate_and_normalize_email("student@@medlecture.com").is_err());
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(matches!(
            validate_and_normalize_email("student@localhost"),
            Err(DomainError::ValidationError(_))
        ));
    }
}
