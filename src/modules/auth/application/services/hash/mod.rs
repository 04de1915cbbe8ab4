mod password_hashing_service;

pub use password_hashing_service::PasswordHashingService;
