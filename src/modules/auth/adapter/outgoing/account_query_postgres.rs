use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::domain::entities::{normalize_email, Account, AccountId};
use crate::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};

use super::db_error::query_error;
use super::sea_orm_entity::accounts::{Column, Entity as AccountEntity, Model as AccountModel};

#[derive(Clone, Debug)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: Option<AccountModel>) -> Result<Option<Account>, AccountQueryError> {
        model
            .map(|m| {
                m.into_account()
                    .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))
            })
            .transpose()
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(&self, account_id: AccountId) -> Result<Option<Account>, AccountQueryError> {
        let model = AccountEntity::find_by_id(account_id.value())
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(query_error)?;

        Self::to_domain(model)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        let model = AccountEntity::find()
            .filter(Column::Email.eq(normalize_email(email)))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(query_error)?;

        Self::to_domain(model)
    }
}
