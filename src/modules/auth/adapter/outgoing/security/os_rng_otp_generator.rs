use rand::{rngs::OsRng, Rng};

use crate::auth::application::domain::entities::OTP_LENGTH;
use crate::auth::application::ports::outgoing::OtpGenerator;

#[derive(Clone, Copy, Debug, Default)]
pub struct OsRngOtpGenerator;

impl OtpGenerator for OsRngOtpGenerator {
    fn generate(&self) -> String {
        let mut rng = OsRng;
        (0..OTP_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}
