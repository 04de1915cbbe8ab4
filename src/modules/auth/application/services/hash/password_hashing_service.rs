use std::fmt;
use std::sync::Arc;

use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// New credentials are always hashed with the primary hasher. Verification
/// dispatches on the stored hash format so bcrypt hashes from the previous
/// platform keep working.
#[derive(Clone)]
pub struct PasswordHashingService {
    primary: Arc<dyn PasswordHasher + Send + Sync>,
    legacy: Arc<dyn PasswordHasher + Send + Sync>,
}

impl fmt::Debug for PasswordHashingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHashingService")
            .field("primary", &"<dyn PasswordHasher>")
            .field("legacy", &"<dyn PasswordHasher>")
            .finish()
    }
}

impl PasswordHashingService {
    pub fn new(
        primary: Arc<dyn PasswordHasher + Send + Sync>,
        legacy: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self { primary, legacy }
    }

    pub async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.primary.hash_password(password).await
    }

    pub async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if BcryptHasher::is_bcrypt_hash(hash) {
            return self.legacy.verify_password(password, hash).await;
        }
        self.primary.verify_password(password, hash).await
    }
}
