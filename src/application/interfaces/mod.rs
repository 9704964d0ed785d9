/// Accounts service interface
pub mod accounts;
