pub mod account_query_postgres;
pub mod account_repository_postgres;
mod db_error;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod system_clock;
