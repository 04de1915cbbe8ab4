pub mod account_registration;
