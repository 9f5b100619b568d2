//! Password hashing

use bcrypt::DEFAULT_COST;

use crate::domain::{DomainError, DomainResult};

/// One-way bcrypt transform for account passwords.
///
/// Constructed once (cost comes from configuration) and injected into the
/// service.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password. The output embeds the salt and cost, so
    /// two calls over the same input produce different strings.
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))
    }

    /// Verify a plaintext against a stored hash.
    ///
    /// A malformed stored hash is a verification failure, not an error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // low cost keeps the tests fast
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let password = "Passw0rd!";
        let hashed = hasher().hash(password).unwrap();

        assert!(hasher().verify(password, &hashed));
        assert!(!hasher().verify("wrong_password", &hashed));
    }

    #[test]
    fn hashing_is_salted() {
        let first = hasher().hash("Passw0rd!").unwrap();
        let second = hasher().hash("Passw0rd!").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_hash_fails_verification() {
        assert!(!hasher().verify("Passw0rd!", "not-a-bcrypt-hash"));
        assert!(!hasher().verify("Passw0rd!", ""));
    }
}
