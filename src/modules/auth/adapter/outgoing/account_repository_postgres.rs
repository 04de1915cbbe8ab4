use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    Account, AccountId, AccountStatus, ProfileFields, ProfilePatch,
};
use crate::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, NewAccount,
};

use super::db_error::repository_error;
use super::sea_orm_entity::accounts::{
    ActiveModel as AccountActiveModel, Column, Entity as AccountEntity, Model as AccountModel,
};

#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: AccountModel) -> Result<Account, AccountRepositoryError> {
        model
            .into_account()
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))
    }

    async fn load(&self, account_id: AccountId) -> Result<AccountModel, AccountRepositoryError> {
        AccountEntity::find_by_id(account_id.value())
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(repository_error)?
            .ok_or(AccountRepositoryError::AccountNotFound)
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        let mut active = AccountActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            status: Set(account.status.as_str().to_string()),
            role: Set(account.role),
            profile_completed: Set(false),
            otp_code: Set(account.otp_code),
            otp_issued_at: Set(Some(account.otp_issued_at.fixed_offset())),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
            ..Default::default()
        };
        active.set_profile(account.profile);

        let inserted = active.insert(&*self.db).await.map_err(repository_error)?;

        Self::to_domain(inserted)
    }

    async fn replace_otp(
        &self,
        account_id: AccountId,
        code: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<bool, AccountRepositoryError> {
        let result = AccountEntity::update_many()
            .col_expr(Column::OtpCode, Expr::value(code))
            .col_expr(Column::OtpIssuedAt, Expr::value(issued_at.fixed_offset()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(account_id.value()))
            .filter(Column::IsDeleted.eq(false))
            .filter(Column::Status.is_in([
                AccountStatus::Registered.as_str(),
                AccountStatus::Pending.as_str(),
            ]))
            .exec(&*self.db)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected == 1)
    }

    async fn consume_otp(
        &self,
        account_id: AccountId,
        code: &str,
    ) -> Result<bool, AccountRepositoryError> {
        let result = AccountEntity::update_many()
            .col_expr(Column::OtpCode, Expr::value(""))
            .col_expr(
                Column::OtpIssuedAt,
                Expr::value(Option::<DateTimeWithTimeZone>::None),
            )
            .col_expr(Column::Status, Expr::value(AccountStatus::Active.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(account_id.value()))
            .filter(Column::IsDeleted.eq(false))
            .filter(Column::OtpCode.eq(code))
            .exec(&*self.db)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected == 1)
    }

    async fn complete_profile(
        &self,
        account_id: AccountId,
        profile: ProfileFields,
    ) -> Result<Account, AccountRepositoryError> {
        let promote = Expr::case(
            Column::Status.eq(AccountStatus::Verified.as_str()),
            Expr::value(AccountStatus::Active.as_str()),
        )
        .finally(Expr::col(Column::Status));

        let mut update = AccountEntity::update_many()
            .col_expr(Column::ProfileCompleted, Expr::value(true))
            .col_expr(Column::Status, promote.into())
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()));
        for (column, value) in profile_columns(profile) {
            update = update.col_expr(column, value);
        }

        let result = update
            .filter(Column::Id.eq(account_id.value()))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(repository_error)?;

        if result.rows_affected == 0 {
            return Err(AccountRepositoryError::AccountNotFound);
        }

        Self::to_domain(self.load(account_id).await?)
    }

    async fn update_profile(
        &self,
        account_id: AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, AccountRepositoryError> {
        let mut update = AccountEntity::update_many();
        for (column, value) in patch_columns(patch) {
            update = update.col_expr(column, value);
        }

        let result = update
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(account_id.value()))
            .filter(Column::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(repository_error)?;

        if result.rows_affected == 0 {
            return Err(AccountRepositoryError::AccountNotFound);
        }

        Self::to_domain(self.load(account_id).await?)
    }
}

/// Every profile column; completion replaces the whole profile.
fn profile_columns(profile: ProfileFields) -> Vec<(Column, SimpleExpr)> {
    vec![
        (Column::FirstName, Expr::value(profile.first_name)),
        (Column::LastName, Expr::value(profile.last_name)),
        (Column::Gender, Expr::value(profile.gender)),
        (Column::PhoneNumber, Expr::value(profile.phone_number)),
        (Column::DateOfBirth, Expr::value(profile.date_of_birth)),
        (Column::WechatId, Expr::value(profile.wechat_id)),
        (Column::Languages, Expr::value(profile.languages)),
        (Column::Occupation, Expr::value(profile.occupation)),
        (Column::Religion, Expr::value(profile.religion)),
        (Column::HeightCm, Expr::value(profile.height_cm)),
        (Column::WeightKg, Expr::value(profile.weight_kg)),
        (Column::MaritalStatus, Expr::value(profile.marital_status)),
        (Column::NoChildren, Expr::value(profile.no_children)),
        (Column::CountryCode, Expr::value(profile.country_code)),
        (Column::StateCode, Expr::value(profile.state_code)),
        (Column::CityCode, Expr::value(profile.city_code)),
        (Column::DistrictCode, Expr::value(profile.district_code)),
        (Column::StreetAddress, Expr::value(profile.street_address)),
        (Column::PostalCode, Expr::value(profile.postal_code)),
    ]
}

/// Only the columns the caller supplied, so concurrent updates of
/// different fields do not overwrite each other.
fn patch_columns(patch: ProfilePatch) -> Vec<(Column, SimpleExpr)> {
    let text = [
        (Column::FirstName, patch.first_name),
        (Column::LastName, patch.last_name),
        (Column::PhoneNumber, patch.phone_number),
        (Column::Languages, patch.languages),
        (Column::Occupation, patch.occupation),
        (Column::WechatId, patch.wechat_id),
        (Column::Religion, patch.religion),
        (Column::MaritalStatus, patch.marital_status),
    ];
    let numbers = [
        (Column::HeightCm, patch.height_cm),
        (Column::WeightKg, patch.weight_kg),
        (Column::NoChildren, patch.no_children),
    ];

    text.into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, Expr::value(v))))
        .chain(
            numbers
                .into_iter()
                .filter_map(|(column, value)| value.map(|v| (column, Expr::value(v)))),
        )
        .collect()
}
