//! Salted password hashing for stored user credentials.
//!
//! bcrypt is CPU bound, so both operations run on the blocking pool.

use crate::errors::DomainError;

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a plain-text password with a fresh salt
    pub async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("could not hash password: {}", e)))
    }

    /// Checks a plain-text password against a stored hash
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| {
                DomainError::internal(format!("password verification task failed: {}", e))
            })?
            .map_err(|e| DomainError::internal(format!("could not verify password: {}", e)))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = PasswordHasher::new(TEST_COST);

        let hash = hasher.hash("s3cret").await.unwrap();
        assert_ne!(hash, "s3cret");
        assert!(hasher.verify("s3cret", &hash).await.unwrap());
        assert!(!hasher.verify("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(TEST_COST);

        let first = hasher.hash("s3cret").await.unwrap();
        let second = hasher.hash("s3cret").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_verify_rejects_malformed_hash() {
        let hasher = PasswordHasher::new(TEST_COST);

        let result = hasher.verify("s3cret", "plain-text").await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
