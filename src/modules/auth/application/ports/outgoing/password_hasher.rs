use async_trait::async_trait;

/// Failures carry no detail on purpose: the password and the stored hash
/// must never reach a log line through an error message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Could not hash credential")]
    HashFailed,

    /// The stored hash could not be parsed. A wrong password is `Ok(false)`.
    #[error("Stored credential hash is unreadable")]
    VerifyFailed,

    #[error("Hashing worker did not complete")]
    TaskFailed,
}

/// One-way credential hashing. Implementations run the expensive work off
/// the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
