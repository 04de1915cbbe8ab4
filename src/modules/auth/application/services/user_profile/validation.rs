//! Field rules shared by registration, profile completion and profile updates.

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::auth::application::domain::entities::{ProfileFields, ProfilePatch};
use crate::location::application::domain::entities::is_valid_region_code;

const MAX_NAME_LENGTH: usize = 64;
const MAX_FREE_TEXT_LENGTH: usize = 255;
const MIN_BIRTH_YEAR: i32 = 1900;
const MAX_HEIGHT_CM: i32 = 300;
const MAX_WEIGHT_KG: i32 = 700;
const MAX_CHILDREN: i32 = 50;
const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{5,28}$").unwrap());
static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{1,15}$").unwrap());

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} is invalid")]
    Invalid(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub type ValidationResult = Result<(), ProfileValidationError>;

fn check_length(field: &'static str, value: &str, max: usize) -> ValidationResult {
    if value.chars().count() > max {
        return Err(ProfileValidationError::TooLong { field, max });
    }
    Ok(())
}

fn check_name(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ProfileValidationError::Missing(field));
    }
    check_length(field, value, MAX_NAME_LENGTH)
}

fn check_phone(value: &str) -> ValidationResult {
    if !PHONE_REGEX.is_match(value) {
        return Err(ProfileValidationError::Invalid("phoneNumber"));
    }
    Ok(())
}

fn check_gender(value: &str) -> ValidationResult {
    if !GENDERS.contains(&value) {
        return Err(ProfileValidationError::Invalid("gender"));
    }
    Ok(())
}

fn check_date_of_birth(value: NaiveDate) -> ValidationResult {
    if value.year() < MIN_BIRTH_YEAR || value >= Utc::now().date_naive() {
        return Err(ProfileValidationError::Invalid("dateOfBirth"));
    }
    Ok(())
}

fn check_region(field: &'static str, value: &str) -> ValidationResult {
    if !is_valid_region_code(value) {
        return Err(ProfileValidationError::Invalid(field));
    }
    Ok(())
}

fn check_postal_code(value: &str) -> ValidationResult {
    if !POSTAL_CODE_REGEX.is_match(value) {
        return Err(ProfileValidationError::Invalid("postalCode"));
    }
    Ok(())
}

fn check_range(field: &'static str, value: Option<i32>, max: i32) -> ValidationResult {
    match value {
        Some(v) if !(0..=max).contains(&v) => Err(ProfileValidationError::Invalid(field)),
        _ => Ok(()),
    }
}

fn check_free_text(field: &'static str, value: &str) -> ValidationResult {
    check_length(field, value, MAX_FREE_TEXT_LENGTH)
}

fn check_optional_fields(profile: &ProfileFields) -> ValidationResult {
    check_free_text("wechatId", &profile.wechat_id)?;
    check_free_text("languages", &profile.languages)?;
    check_free_text("occupation", &profile.occupation)?;
    check_free_text("religion", &profile.religion)?;
    check_free_text("maritalStatus", &profile.marital_status)?;
    check_range("heightCm", profile.height_cm, MAX_HEIGHT_CM)?;
    check_range("weightKg", profile.weight_kg, MAX_WEIGHT_KG)?;
    check_range("noChildren", profile.no_children, MAX_CHILDREN)?;
    if !profile.city_code.is_empty() {
        check_region("cityCode", &profile.city_code)?;
    }
    if !profile.district_code.is_empty() {
        check_region("districtCode", &profile.district_code)?;
    }
    Ok(())
}

/// Everything a profile needs before it counts as complete.
pub fn validate_complete_profile(profile: &ProfileFields) -> ValidationResult {
    check_name("firstName", &profile.first_name)?;
    check_name("lastName", &profile.last_name)?;

    if profile.gender.is_empty() {
        return Err(ProfileValidationError::Missing("gender"));
    }
    check_gender(&profile.gender)?;

    let date_of_birth = profile
        .date_of_birth
        .ok_or(ProfileValidationError::Missing("dateOfBirth"))?;
    check_date_of_birth(date_of_birth)?;

    if profile.phone_number.is_empty() {
        return Err(ProfileValidationError::Missing("phoneNumber"));
    }
    check_phone(&profile.phone_number)?;

    if profile.country_code.is_empty() {
        return Err(ProfileValidationError::Missing("countryCode"));
    }
    check_region("countryCode", &profile.country_code)?;

    if profile.state_code.is_empty() {
        return Err(ProfileValidationError::Missing("stateCode"));
    }
    check_region("stateCode", &profile.state_code)?;

    if profile.street_address.trim().is_empty() {
        return Err(ProfileValidationError::Missing("streetAddress"));
    }
    check_free_text("streetAddress", &profile.street_address)?;

    if profile.postal_code.is_empty() {
        return Err(ProfileValidationError::Missing("postalCode"));
    }
    check_postal_code(&profile.postal_code)?;

    check_optional_fields(profile)
}

/// Registration accepts any subset of profile fields; only the ones present
/// are checked.
pub fn validate_partial_profile(profile: &ProfileFields) -> ValidationResult {
    if !profile.first_name.is_empty() {
        check_name("firstName", &profile.first_name)?;
    }
    if !profile.last_name.is_empty() {
        check_name("lastName", &profile.last_name)?;
    }
    if !profile.gender.is_empty() {
        check_gender(&profile.gender)?;
    }
    if let Some(dob) = profile.date_of_birth {
        check_date_of_birth(dob)?;
    }
    if !profile.phone_number.is_empty() {
        check_phone(&profile.phone_number)?;
    }
    if !profile.country_code.is_empty() {
        check_region("countryCode", &profile.country_code)?;
    }
    if !profile.state_code.is_empty() {
        check_region("stateCode", &profile.state_code)?;
    }
    check_free_text("streetAddress", &profile.street_address)?;
    if !profile.postal_code.is_empty() {
        check_postal_code(&profile.postal_code)?;
    }

    check_optional_fields(profile)
}

pub fn validate_patch(patch: &ProfilePatch) -> ValidationResult {
    fn non_blank(field: &'static str, value: &Option<String>) -> ValidationResult {
        match value {
            Some(v) if v.trim().is_empty() => Err(ProfileValidationError::Missing(field)),
            Some(v) => check_free_text(field, v),
            None => Ok(()),
        }
    }

    if let Some(first_name) = &patch.first_name {
        check_name("firstName", first_name)?;
    }
    if let Some(last_name) = &patch.last_name {
        check_name("lastName", last_name)?;
    }
    if let Some(phone) = &patch.phone_number {
        check_phone(phone)?;
    }
    non_blank("languages", &patch.languages)?;
    non_blank("occupation", &patch.occupation)?;
    non_blank("wechatId", &patch.wechat_id)?;
    non_blank("religion", &patch.religion)?;
    non_blank("maritalStatus", &patch.marital_status)?;
    check_range("heightCm", patch.height_cm, MAX_HEIGHT_CM)?;
    check_range("weightKg", patch.weight_kg, MAX_WEIGHT_KG)?;
    check_range("noChildren", patch.no_children, MAX_CHILDREN)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::complete_profile_fields;

    #[test]
    fn test_complete_profile_accepts_valid_fields() {
        assert_eq!(validate_complete_profile(&complete_profile_fields()), Ok(()));
    }

    #[test]
    fn test_complete_profile_reports_first_missing_field() {
        let mut profile = complete_profile_fields();
        profile.date_of_birth = None;
        assert_eq!(
            validate_complete_profile(&profile),
            Err(ProfileValidationError::Missing("dateOfBirth"))
        );

        let mut profile = complete_profile_fields();
        profile.postal_code.clear();
        assert_eq!(
            validate_complete_profile(&profile),
            Err(ProfileValidationError::Missing("postalCode"))
        );
    }

    #[test]
    fn test_gender_must_be_known_value() {
        let mut profile = complete_profile_fields();
        profile.gender = "female".to_string();
        assert_eq!(
            validate_complete_profile(&profile),
            Err(ProfileValidationError::Invalid("gender"))
        );
    }

    #[test]
    fn test_date_of_birth_in_future_rejected() {
        let mut profile = complete_profile_fields();
        profile.date_of_birth = Some(Utc::now().date_naive() + chrono::Duration::days(1));
        assert_eq!(
            validate_complete_profile(&profile),
            Err(ProfileValidationError::Invalid("dateOfBirth"))
        );
    }

    #[test]
    fn test_phone_number_format() {
        assert!(check_phone("+86 138-0000-0000").is_ok());
        assert!(check_phone("13800000000").is_ok());
        assert!(check_phone("call me").is_err());
        assert!(check_phone("+1").is_err());
    }

    #[test]
    fn test_partial_profile_ignores_absent_fields() {
        assert_eq!(validate_partial_profile(&ProfileFields::default()), Ok(()));

        let profile = ProfileFields {
            phone_number: "abc".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_partial_profile(&profile),
            Err(ProfileValidationError::Invalid("phoneNumber"))
        );
    }

    #[test]
    fn test_patch_rejects_blank_and_out_of_range_values() {
        let blank = ProfilePatch {
            occupation: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_patch(&blank),
            Err(ProfileValidationError::Missing("occupation"))
        );

        let negative = ProfilePatch {
            height_cm: Some(-5),
            ..Default::default()
        };
        assert_eq!(
            validate_patch(&negative),
            Err(ProfileValidationError::Invalid("heightCm"))
        );
    }

    #[test]
    fn test_name_length_limit() {
        let patch = ProfilePatch {
            first_name: Some("x".repeat(MAX_NAME_LENGTH + 1)),
            ..Default::default()
        };
        assert!(matches!(
            validate_patch(&patch),
            Err(ProfileValidationError::TooLong { field: "firstName", .. })
        ));
    }
}
