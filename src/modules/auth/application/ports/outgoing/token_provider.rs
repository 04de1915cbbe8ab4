use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::AccountId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    /// Malformed, wrongly signed, expired and foreign-issuer tokens all collapse here.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub role: i32,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

pub trait TokenProvider: Send + Sync {
    fn issue_token_with_ttl(
        &self,
        account_id: AccountId,
        role: i32,
        ttl_seconds: i64,
    ) -> Result<String, TokenError>;

    fn default_ttl_seconds(&self) -> i64;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn issue_token(&self, account_id: AccountId, role: i32) -> Result<String, TokenError> {
        self.issue_token_with_ttl(account_id, role, self.default_ttl_seconds())
    }
}
