//! Password hashing and verification.
//!
//! Stored credentials are bcrypt hashes. `hash_password` exists so fixtures
//! and migration scripts can produce values the login check accepts.

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a plaintext password for storage. Each call salts anew, so two
/// hashes of the same password differ while both verify.
pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    hash(plain, DEFAULT_COST)
}

/// Checks a submitted password against the stored credential.
///
/// With `allow_plaintext` enabled, rows whose credential was never migrated
/// to a hash are accepted by direct comparison. Leave it off once every
/// stored credential is a bcrypt hash.
pub fn verify_password(plain: &str, stored: &str, allow_plaintext: bool) -> bool {
    match verify(plain, stored) {
        Ok(true) => true,
        Ok(false) | Err(_) => allow_plaintext && plain == stored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 4 keeps the hashing tests fast; verification is cost-agnostic.
    fn quick_hash(plain: &str) -> String {
        bcrypt::hash(plain, 4).unwrap()
    }

    #[test]
    fn hashed_password_verifies() {
        let stored = hash_password("secreto").unwrap();
        assert!(verify_password("secreto", &stored, false));
        assert!(!verify_password("otra", &stored, false));
    }

    #[test]
    fn plaintext_rows_only_pass_with_the_flag() {
        assert!(!verify_password("secreto", "secreto", false));
        assert!(verify_password("secreto", "secreto", true));
        assert!(!verify_password("otra", "secreto", true));
    }

    #[test]
    fn same_password_hashes_differently_but_both_verify() {
        let first = quick_hash("secreto");
        let second = quick_hash("secreto");
        assert_ne!(first, second);
        assert!(verify_password("secreto", &first, false));
        assert!(verify_password("secreto", &second, false));
    }
}
