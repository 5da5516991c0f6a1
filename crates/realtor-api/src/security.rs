//! Input validation helpers.
//!
//! Path identifiers are validated as well-formed before they reach the
//! store, so a malformed id is a client error rather than a server one.

/// Maximum accepted email length (RFC 5321 limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum accepted document id length.
const MAX_DOC_ID_LENGTH: usize = 64;

/// Validate a store document id from a request path.
///
/// Valid format: alphanumeric characters, hyphens and underscores,
/// 1-64 chars. Store-generated ids always satisfy this.
pub fn is_valid_doc_id(id: &str) -> bool {
    if id.is_empty() || id.len() > MAX_DOC_ID_LENGTH {
        return false;
    }
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Loose email shape check: one '@' with something on both sides, no
/// whitespace, bounded length.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_id_validation() {
        assert!(is_valid_doc_id("bXVp4nCsuJkfYqLwQd2a"));
        assert!(is_valid_doc_id("abc-123_DEF"));
        assert!(!is_valid_doc_id(""));
        assert!(!is_valid_doc_id("has/slash"));
        assert!(!is_valid_doc_id("has.dot"));
        assert!(!is_valid_doc_id(&"x".repeat(65)));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("has space@x.com"));
    }
}
