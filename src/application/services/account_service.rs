use crate::application::client::Client;
use crate::application::interfaces::accounts::AccountsApi;
use crate::constants::ACCOUNTS_PATH;
use crate::error::AppError;
use crate::model::http::ApiResponse;
use crate::model::requests::AccountsListOptions;
use crate::model::responses::ListEnvelope;
use crate::presentation::account::Account;
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

/// Accounts endpoints of the RelateIQ API, obtained with [`Client::accounts`]
#[derive(Debug, Clone, Copy)]
pub struct AccountsService<'a> {
    client: &'a Client,
}

impl<'a> AccountsService<'a> {
    /// Creates a new instance of the accounts service
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets the client used by the service
    pub fn client(&self) -> &'a Client {
        self.client
    }
}

#[async_trait]
impl<'a> AccountsApi for AccountsService<'a> {
    async fn list(
        &self,
        options: &AccountsListOptions,
    ) -> Result<(Vec<Account>, ApiResponse), AppError> {
        info!("Listing accounts");

        let request =
            self.client
                .build_request::<_, ()>(Method::GET, ACCOUNTS_PATH, Some(options), None)?;
        let (list, response): (ListEnvelope<Account>, ApiResponse) =
            self.client.execute(request).await?;

        debug!("Accounts obtained: {} accounts", list.objects.len());
        Ok((list.into_inner(), response))
    }
}
