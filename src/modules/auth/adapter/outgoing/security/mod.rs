pub mod argon2_hasher;
pub mod bcrypt_hasher;
pub mod os_rng_otp_generator;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use os_rng_otp_generator::OsRngOtpGenerator;
