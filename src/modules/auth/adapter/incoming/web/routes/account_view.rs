use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{Account, ProfileFields};

/// Public projection of an account. The password hash and any pending
/// verification code have no field here.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "patient@example.com")]
    pub email: String,

    /// One of `Registered`, `Pending`, `Verified`, `Active`
    #[schema(example = "Active")]
    pub status: String,

    #[schema(example = 1)]
    pub role: i32,

    #[schema(example = true)]
    pub profile_completed: bool,

    pub profile: ProfileView,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `{ "account": ... }` body shared by the profile read and update routes.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub account: AccountView,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Lee")]
    pub last_name: String,
    #[schema(example = "Female")]
    pub gender: String,
    #[schema(example = "+86 138 0000 0000")]
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
    #[schema(example = "CN")]
    pub country_code: String,
    pub state_code: String,
    pub city_code: String,
    pub district_code: String,
    pub street_address: String,
    pub postal_code: String,
}

impl From<ProfileFields> for ProfileView {
    fn from(p: ProfileFields) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            gender: p.gender,
            phone_number: p.phone_number,
            date_of_birth: p.date_of_birth,
            wechat_id: p.wechat_id,
            languages: p.languages,
            occupation: p.occupation,
            religion: p.religion,
            height_cm: p.height_cm,
            weight_kg: p.weight_kg,
            marital_status: p.marital_status,
            no_children: p.no_children,
            country_code: p.country_code,
            state_code: p.state_code,
            city_code: p.city_code,
            district_code: p.district_code,
            street_address: p.street_address,
            postal_code: p.postal_code,
        }
    }
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            status: account.status.as_str().to_string(),
            role: account.role,
            profile_completed: account.profile_completed,
            profile: account.profile.into(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
