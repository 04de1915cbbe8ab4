mod complete_profile;
mod fetch_profile;
mod update_profile;
pub mod validation;

pub use complete_profile::CompleteProfileService;
pub use fetch_profile::FetchProfileService;
pub use update_profile::UpdateProfileService;
