//! rdcom: command-line client for the RDCom platform API.

mod args;
mod client;
mod handlers;
mod print;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;
use client::build_client;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(client::default_log_filter(&cli.connection));

    let client = match build_client(&cli.connection) {
        Ok(client) => client,
        Err(err) => {
            print::print_error(&err);
            return ExitCode::FAILURE;
        }
    };

    let result = handlers::handle(&client, cli.command, cli.format).await;
    client.close();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            print::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
