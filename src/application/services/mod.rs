/// Module containing the accounts service
pub mod account_service;

pub use crate::application::interfaces::accounts::AccountsApi;
pub use account_service::AccountsService;
