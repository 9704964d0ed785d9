use prettytable::{Table, row};
use relateiq_client::prelude::*;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();

    let config = Config::new();
    if let Err(e) = config.credentials() {
        println!(
            "This example requires RelateIQ API credentials, which you can obtain from your \
             organization's integration settings screen, to be set in the {ENV_API_KEY} and \
             {ENV_API_SECRET} environment variables ({e})."
        );
        return ExitCode::SUCCESS;
    }

    let client = match Client::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Listing accounts from {}", client.base_url());
    let (accounts, _response) = match client.accounts().list(&AccountsListOptions::new()).await {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut table = Table::new();
    table.add_row(row!["NAME", "ID", "MODIFIED"]);
    for account in &accounts {
        table.add_row(row![
            account.name,
            account.id,
            account.modified_date.to_rfc3339()
        ]);
    }
    table.printstd();

    info!("{} accounts", accounts.len());
    ExitCode::SUCCESS
}
