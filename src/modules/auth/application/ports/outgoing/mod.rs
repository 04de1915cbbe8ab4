pub mod account_query;
pub mod account_repository;
pub mod clock;
pub mod otp_generator;
pub mod password_hasher;
pub mod token_provider;

pub use account_query::{AccountQuery, AccountQueryError};
pub use account_repository::{AccountRepository, AccountRepositoryError, NewAccount};
pub use clock::Clock;
pub use otp_generator::OtpGenerator;
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
