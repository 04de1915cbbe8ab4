use sea_orm::DbErr;

use crate::auth::application::ports::outgoing::{AccountQueryError, AccountRepositoryError};

fn is_connection_error(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

fn is_unique_violation(err: &DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

pub(crate) fn query_error(err: DbErr) -> AccountQueryError {
    if is_connection_error(&err) {
        return AccountQueryError::Unavailable(err.to_string());
    }
    AccountQueryError::DatabaseError(err.to_string())
}

pub(crate) fn repository_error(err: DbErr) -> AccountRepositoryError {
    if is_connection_error(&err) {
        return AccountRepositoryError::Unavailable(err.to_string());
    }
    if is_unique_violation(&err) {
        return AccountRepositoryError::EmailAlreadyExists;
    }
    AccountRepositoryError::DatabaseError(err.to_string())
}
