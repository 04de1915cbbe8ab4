use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Clone, Copy, Debug, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let len = password.chars().count();

        if len < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort(MIN_PASSWORD_LENGTH));
        }

        if len > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong(MAX_PASSWORD_LENGTH));
        }

        Ok(())
    }
}
