/// Account resource
pub mod account;
/// Serde helpers for the API wire formats
pub mod serialization;

pub use account::Account;
