use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;
use uuid::Uuid;

pub const OTP_LENGTH: usize = 6;
pub const OTP_VALIDITY_SECONDS: i64 = 10 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Coarse lifecycle stage of an account.
///
/// `Registered` and `Pending` both mean "email not yet confirmed". `Verified`
/// only appears on rows written before verification activated accounts
/// directly; completing the profile promotes it to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountStatus {
    Registered,
    Pending,
    Verified,
    Active,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Registered => "Registered",
            AccountStatus::Pending => "Pending",
            AccountStatus::Verified => "Verified",
            AccountStatus::Active => "Active",
        }
    }

    pub fn is_unverified(&self) -> bool {
        matches!(self, AccountStatus::Registered | AccountStatus::Pending)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown account status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AccountStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Registered" => Ok(AccountStatus::Registered),
            "Pending" => Ok(AccountStatus::Pending),
            "Verified" => Ok(AccountStatus::Verified),
            "Active" => Ok(AccountStatus::Active),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A submitted one-time code, guaranteed to be exactly six ASCII digits.
#[derive(Clone, PartialEq, Eq)]
pub struct OneTimeCode(String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OneTimeCodeError {
    #[error("Verification code must be exactly 6 digits")]
    InvalidFormat,
}

impl OneTimeCode {
    pub fn parse(raw: &str) -> Result<Self, OneTimeCodeError> {
        let raw = raw.trim();
        if raw.len() != OTP_LENGTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OneTimeCodeError::InvalidFormat);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time comparison against the stored code. An empty stored code
    /// (already consumed) never matches.
    pub fn matches(&self, stored: &str) -> bool {
        if stored.len() != OTP_LENGTH {
            return false;
        }
        self.0.as_bytes().ct_eq(stored.as_bytes()).into()
    }
}

// Codes must not leak through Debug output in logs.
impl fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimeCode(******)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub wechat_id: String,
    pub languages: String,
    pub occupation: String,
    pub religion: String,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub marital_status: String,
    pub no_children: Option<i32>,
    pub country_code: String,
    pub state_code: String,
    pub city_code: String,
    pub district_code: String,
    pub street_address: String,
    pub postal_code: String,
}

/// Allow-listed partial update of an account's mutable profile fields.
/// Identity fields (email, password, role) have no representation here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub languages: Option<String>,
    pub occupation: Option<String>,
    pub wechat_id: Option<String>,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<i32>,
    pub no_children: Option<i32>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == ProfilePatch::default()
    }

    pub fn apply_to(&self, profile: &mut ProfileFields) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut profile.first_name, &self.first_name);
        set(&mut profile.last_name, &self.last_name);
        set(&mut profile.phone_number, &self.phone_number);
        set(&mut profile.languages, &self.languages);
        set(&mut profile.occupation, &self.occupation);
        set(&mut profile.wechat_id, &self.wechat_id);
        set(&mut profile.religion, &self.religion);
        set(&mut profile.marital_status, &self.marital_status);

        if self.height_cm.is_some() {
            profile.height_cm = self.height_cm;
        }
        if self.weight_kg.is_some() {
            profile.weight_kg = self.weight_kg;
        }
        if self.no_children.is_some() {
            profile.no_children = self.no_children;
        }
    }
}

#[derive(Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub password_hash: String,
    pub status: AccountStatus,
    pub role: i32,
    pub profile: ProfileFields,
    pub profile_completed: bool,
    pub otp_code: String,
    pub otp_issued_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("status", &self.status)
            .field("role", &self.role)
            .field("profile_completed", &self.profile_completed)
            .field("otp_code", &"<redacted>")
            .field("otp_issued_at", &self.otp_issued_at)
            .field("is_deleted", &self.is_deleted)
            .finish()
    }
}

impl Account {
    /// True once `now` is strictly more than ten minutes past issuance.
    pub fn otp_expired(&self, now: DateTime<Utc>) -> bool {
        match self.otp_issued_at {
            Some(issued_at) => now - issued_at > Duration::seconds(OTP_VALIDITY_SECONDS),
            None => true,
        }
    }

    pub fn has_pending_otp(&self) -> bool {
        !self.otp_code.is_empty()
    }
}

/// Emails are compared case-insensitively everywhere; this is the only
/// normalisation applied before storage or lookup.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
