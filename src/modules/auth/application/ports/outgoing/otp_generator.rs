/// Source of six-digit one-time codes. Implementations must draw every digit
/// uniformly from a cryptographically secure generator.
pub trait OtpGenerator: Send + Sync {
    fn generate(&self) -> String;
}
