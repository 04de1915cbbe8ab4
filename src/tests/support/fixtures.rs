use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::accounts;
use crate::auth::application::domain::entities::{
    Account, AccountId, AccountStatus, ProfileFields,
};

pub fn account_model(email: &str, status: &str) -> accounts::Model {
    let now = Utc::now().fixed_offset();
    accounts::Model {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        status: status.to_string(),
        role: 1,
        first_name: String::new(),
        last_name: String::new(),
        gender: String::new(),
        phone_number: String::new(),
        date_of_birth: None,
        wechat_id: String::new(),
        languages: String::new(),
        occupation: String::new(),
        religion: String::new(),
        height_cm: None,
        weight_kg: None,
        marital_status: String::new(),
        no_children: None,
        country_code: String::new(),
        state_code: String::new(),
        city_code: String::new(),
        district_code: String::new(),
        street_address: String::new(),
        postal_code: String::new(),
        profile_completed: false,
        otp_code: String::new(),
        otp_issued_at: None,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn account(email: &str, status: AccountStatus) -> Account {
    let now = Utc::now();
    Account {
        id: AccountId::new(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        status,
        role: 1,
        profile: ProfileFields::default(),
        profile_completed: false,
        otp_code: String::new(),
        otp_issued_at: None,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}

/// A profile that satisfies every completion rule.
pub fn complete_profile_fields() -> ProfileFields {
    ProfileFields {
        first_name: "Ana".to_string(),
        last_name: "Lee".to_string(),
        gender: "Female".to_string(),
        phone_number: "+86 138 0000 0000".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12),
        country_code: "CN".to_string(),
        state_code: "GD".to_string(),
        city_code: "SZ".to_string(),
        street_address: "1 Shennan Road".to_string(),
        postal_code: "518000".to_string(),
        ..Default::default()
    }
}
