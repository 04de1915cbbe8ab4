use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::application::ports::outgoing::{Clock, OtpGenerator};
use crate::auth::application::services::hash::PasswordHashingService;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "test-secret-key-that-is-long-enough-for-hs256";
pub const TEST_JWT_ISSUER: &str = "medical-platform-test";

/// Clock whose time only moves when a test says so.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Hands out queued codes in order, falling back to "000000" once drained.
pub struct SequenceOtpGenerator {
    codes: Mutex<VecDeque<String>>,
}

impl SequenceOtpGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl OtpGenerator for SequenceOtpGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "000000".to_string())
    }
}

pub fn test_jwt_service() -> JwtTokenService {
    let config = JwtConfig::new(TEST_JWT_SECRET.to_string(), TEST_JWT_ISSUER.to_string(), 3600)
        .expect("valid test jwt config");
    JwtTokenService::new(config)
}

pub fn test_hashing_service() -> PasswordHashingService {
    PasswordHashingService::new(
        Arc::new(Argon2Hasher::fast()),
        Arc::new(BcryptHasher::with_cost(4)),
    )
}
