//! Command-line surface for `rdcom`.

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

use rdcom_rs::client::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "rdcom", version, about = "RDCom platform API command-line client", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Endpoint, TLS, diagnostics and authentication settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// The API endpoint to use
    #[arg(short, long, env = "SMS_ENDPOINT", default_value = DEFAULT_BASE_URL, global = true)]
    pub endpoint: String,

    /// Skip TLS certificate verification
    #[arg(
        short = 'S',
        long,
        env = "SMS_SKIP_TLS_VERIFY",
        value_parser = BoolishValueParser::new(),
        default_value_t = false,
        hide = true,
        global = true
    )]
    pub skip_verify_tls: bool,

    /// Log every API call at debug level
    #[arg(
        short = 'D',
        long,
        env = "SMS_ENABLE_DEBUG",
        value_parser = BoolishValueParser::new(),
        default_value_t = false,
        hide = true,
        global = true
    )]
    pub enable_debug: bool,

    /// Log connection-level details of every API call
    #[arg(
        short = 'T',
        long,
        env = "SMS_ENABLE_TRACE",
        value_parser = BoolishValueParser::new(),
        default_value_t = false,
        hide = true,
        global = true
    )]
    pub enable_trace: bool,

    /// The token to use for authentication
    #[arg(short, long, env = "SMS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// The username to use for authentication
    #[arg(short, long, env = "SMS_USERNAME", global = true)]
    pub username: Option<String>,

    /// The password to use for authentication
    #[arg(short, long, env = "SMS_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check connectivity and credentials
    Ping,
    /// Account inspection
    Account(AccountArgs),
    /// API token management
    Token(TokenArgs),
    /// SMS gateway inspection
    SmsGateway(SmsGatewayArgs),
}

#[derive(Parser, Debug)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub action: AccountCmd,
}

#[derive(Subcommand, Debug)]
pub enum AccountCmd {
    /// List every account visible to the caller
    List,
}

#[derive(Parser, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub action: TokenCmd,
}

#[derive(Subcommand, Debug)]
pub enum TokenCmd {
    /// List the caller's tokens
    List,
    /// Create a new token
    Create,
    /// Delete one or more tokens
    Delete {
        /// Token identifiers
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Parser, Debug)]
pub struct SmsGatewayArgs {
    #[command(subcommand)]
    pub action: SmsGatewayCmd,
}

#[derive(Subcommand, Debug)]
pub enum SmsGatewayCmd {
    /// List the SMS gateways of an account
    List {
        /// The account whose SMS gateways to list
        #[arg(short, long, env = "SMS_ACCOUNT")]
        account: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// YAML documents
    Yaml,
}
