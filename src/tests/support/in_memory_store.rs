use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::auth::application::domain::entities::{
    normalize_email, Account, AccountId, AccountStatus, ProfileFields, ProfilePatch,
};
use crate::auth::application::ports::outgoing::{
    AccountQuery, AccountQueryError, AccountRepository, AccountRepositoryError, NewAccount,
};

/// Account store backed by a map. Conditional writes follow the same rules as
/// the Postgres adapter so use cases can be exercised end to end.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: Mutex<HashMap<AccountId, Account>>,
    unavailable: AtomicBool,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, account: Account) {
        self.accounts.lock().unwrap().insert(account.id, account);
    }

    pub fn get(&self, id: AccountId) -> Option<Account> {
        self.accounts.lock().unwrap().get(&id).cloned()
    }

    pub fn get_by_email(&self, email: &str) -> Option<Account> {
        let email = normalize_email(email);
        self.accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    /// Apply an arbitrary change, e.g. to simulate an operator deactivating
    /// an account.
    pub fn modify(&self, id: AccountId, f: impl FnOnce(&mut Account)) {
        if let Some(account) = self.accounts.lock().unwrap().get_mut(&id) {
            f(account);
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_query(&self) -> Result<(), AccountQueryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AccountQueryError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }

    fn check_repository(&self) -> Result<(), AccountRepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AccountRepositoryError::Unavailable(
                "store offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountQuery for InMemoryAccountStore {
    async fn find_by_id(&self, account_id: AccountId) -> Result<Option<Account>, AccountQueryError> {
        self.check_query()?;
        Ok(self.get(account_id).filter(|a| !a.is_deleted))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        self.check_query()?;
        Ok(self.get_by_email(email).filter(|a| !a.is_deleted))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        self.check_repository()?;
        let mut accounts = self.accounts.lock().unwrap();

        let email = normalize_email(&account.email);
        if accounts.values().any(|a| normalize_email(&a.email) == email) {
            return Err(AccountRepositoryError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let created = Account {
            id: AccountId::new(),
            email: account.email,
            password_hash: account.password_hash,
            status: account.status,
            role: account.role,
            profile: account.profile,
            profile_completed: false,
            otp_code: account.otp_code,
            otp_issued_at: Some(account.otp_issued_at),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        accounts.insert(created.id, created.clone());

        Ok(created)
    }

    async fn replace_otp(
        &self,
        account_id: AccountId,
        code: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<bool, AccountRepositoryError> {
        self.check_repository()?;
        let mut accounts = self.accounts.lock().unwrap();

        match accounts.get_mut(&account_id) {
            Some(a) if !a.is_deleted && a.status.is_unverified() => {
                a.otp_code = code.to_string();
                a.otp_issued_at = Some(issued_at);
                a.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn consume_otp(
        &self,
        account_id: AccountId,
        code: &str,
    ) -> Result<bool, AccountRepositoryError> {
        self.check_repository()?;
        let mut accounts = self.accounts.lock().unwrap();

        match accounts.get_mut(&account_id) {
            Some(a) if !a.is_deleted && !a.otp_code.is_empty() && a.otp_code == code => {
                a.otp_code.clear();
                a.otp_issued_at = None;
                a.status = AccountStatus::Active;
                a.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn complete_profile(
        &self,
        account_id: AccountId,
        profile: ProfileFields,
    ) -> Result<Account, AccountRepositoryError> {
        self.check_repository()?;
        let mut accounts = self.accounts.lock().unwrap();

        let account = accounts
            .get_mut(&account_id)
            .filter(|a| !a.is_deleted)
            .ok_or(AccountRepositoryError::AccountNotFound)?;
        account.profile = profile;
        account.profile_completed = true;
        if account.status == AccountStatus::Verified {
            account.status = AccountStatus::Active;
        }
        account.updated_at = Utc::now();

        Ok(account.clone())
    }

    async fn update_profile(
        &self,
        account_id: AccountId,
        patch: ProfilePatch,
    ) -> Result<Account, AccountRepositoryError> {
        self.check_repository()?;
        let mut accounts = self.accounts.lock().unwrap();

        let account = accounts
            .get_mut(&account_id)
            .filter(|a| !a.is_deleted)
            .ok_or(AccountRepositoryError::AccountNotFound)?;
        patch.apply_to(&mut account.profile);
        account.updated_at = Utc::now();

        Ok(account.clone())
    }
}
