use crate::error::AppError;
use crate::model::http::ApiResponse;
use crate::model::requests::AccountsListOptions;
use crate::presentation::account::Account;
use async_trait::async_trait;

/// Interface for the accounts endpoints
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Lists the accounts of the organization.
    ///
    /// # Arguments
    /// * `options` - Optional id filter and pagination. Pagination is driven by the
    ///   caller: pass the next start offset to get the following page.
    ///
    /// # Returns
    /// * The accounts of the requested page and the raw response
    async fn list(
        &self,
        options: &AccountsListOptions,
    ) -> Result<(Vec<Account>, ApiResponse), AppError>;
}
