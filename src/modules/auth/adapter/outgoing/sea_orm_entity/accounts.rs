use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{
    Account, AccountId, AccountStatus, ProfileFields, UnknownStatus,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub status: String,
    pub role: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub phone_number: String,
    pub date_of_birth: Option<Date>,
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
    pub profile_completed: bool,
    pub otp_code: String,
    pub otp_issued_at: Option<DateTimeWithTimeZone>,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_account(self) -> Result<Account, UnknownStatus> {
        let status: AccountStatus = self.status.parse()?;

        Ok(Account {
            id: AccountId::from(self.id),
            email: self.email,
            password_hash: self.password_hash,
            status,
            role: self.role,
            profile: ProfileFields {
                first_name: self.first_name,
                last_name: self.last_name,
                gender: self.gender,
                phone_number: self.phone_number,
                date_of_birth: self.date_of_birth,
                wechat_id: self.wechat_id,
                languages: self.languages,
                occupation: self.occupation,
                religion: self.religion,
                height_cm: self.height_cm,
                weight_kg: self.weight_kg,
                marital_status: self.marital_status,
                no_children: self.no_children,
                country_code: self.country_code,
                state_code: self.state_code,
                city_code: self.city_code,
                district_code: self.district_code,
                street_address: self.street_address,
                postal_code: self.postal_code,
            },
            profile_completed: self.profile_completed,
            otp_code: self.otp_code,
            otp_issued_at: self.otp_issued_at.map(|t| t.to_utc()),
            is_deleted: self.is_deleted,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        })
    }
}

impl ActiveModel {
    pub fn set_profile(&mut self, profile: ProfileFields) {
        use sea_orm::ActiveValue::Set;

        self.first_name = Set(profile.first_name);
        self.last_name = Set(profile.last_name);
        self.gender = Set(profile.gender);
        self.phone_number = Set(profile.phone_number);
        self.date_of_birth = Set(profile.date_of_birth);
        self.wechat_id = Set(profile.wechat_id);
        self.languages = Set(profile.languages);
        self.occupation = Set(profile.occupation);
        self.religion = Set(profile.religion);
        self.height_cm = Set(profile.height_cm);
        self.weight_kg = Set(profile.weight_kg);
        self.marital_status = Set(profile.marital_status);
        self.no_children = Set(profile.no_children);
        self.country_code = Set(profile.country_code);
        self.state_code = Set(profile.state_code);
        self.city_code = Set(profile.city_code);
        self.district_code = Set(profile.district_code);
        self.street_address = Set(profile.street_address);
        self.postal_code = Set(profile.postal_code);
    }
}
