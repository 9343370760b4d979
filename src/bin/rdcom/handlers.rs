use rdcom_rs::{AccountCode, RdcomClient, TokenId};

use crate::args::{AccountCmd, Commands, OutputFormat, SmsGatewayCmd, TokenCmd};
use crate::client::CliError;
use crate::print;

pub async fn handle(client: &RdcomClient, command: Commands, format: OutputFormat) -> Result<(), CliError> {
    match command {
        Commands::Ping => ping(client).await,
        Commands::Account(cmd) => match cmd.action {
            AccountCmd::List => {
                let accounts = client.accounts().list().await?;
                tracing::info!(accounts = accounts.len(), "listed accounts");
                print::print_accounts(&accounts, format)
            }
        },
        Commands::Token(cmd) => token(client, cmd.action, format).await,
        Commands::SmsGateway(cmd) => match cmd.action {
            SmsGatewayCmd::List { account } => {
                let gateways = client.sms_gateways().list(&AccountCode::new(account)).await?;
                tracing::info!(gateways = gateways.len(), "listed SMS gateways");
                print::print_gateways(&gateways, format)
            }
        },
    }
}

async fn ping(client: &RdcomClient) -> Result<(), CliError> {
    let result = client.ping().await;
    print::print_connection(result.is_ok());
    Ok(result?)
}

async fn token(client: &RdcomClient, action: TokenCmd, format: OutputFormat) -> Result<(), CliError> {
    match action {
        TokenCmd::List => {
            let tokens = client.tokens().list().await?;
            print::print_tokens(&tokens, format)
        }
        TokenCmd::Create => {
            let token = client.tokens().create().await?;
            print::print_tokens(std::slice::from_ref(&token), format)
        }
        TokenCmd::Delete { ids } => {
            for id in ids {
                let deleted = client.tokens().delete(&TokenId::new(id)).await?;
                print::print_tokens(std::slice::from_ref(&deleted), format)?;
            }
            Ok(())
        }
    }
}
