use rdcom_rs::{ClientConfig, RdcomClient};

use crate::args::ConnectionArgs;

const USER_AGENT: &str = concat!("rdcom/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] rdcom_rs::Error),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_yaml::Error),
}

/// Build the API client from the connection flags.
///
/// Username and password are passed through as soon as either is given, so
/// a half-specified pair is reported by config validation rather than
/// silently ignored.
pub fn build_client(args: &ConnectionArgs) -> Result<RdcomClient, CliError> {
    let mut builder = ClientConfig::builder()
        .with_base_url(&args.endpoint)
        .with_user_agent(USER_AGENT)
        .with_skip_tls_verify(args.skip_verify_tls)
        .with_debug(args.enable_debug)
        .with_trace(args.enable_trace);

    if let Some(token) = &args.token {
        builder = builder.with_auth_token(token);
    }

    if args.username.is_some() || args.password.is_some() {
        builder = builder.with_user_credentials(
            args.username.clone().unwrap_or_default(),
            args.password.clone().unwrap_or_default(),
        );
    }

    let config = builder.build()?;
    Ok(RdcomClient::new(config)?)
}

/// Default log filter for the diagnostics flags; `RUST_LOG` takes precedence.
pub fn default_log_filter(args: &ConnectionArgs) -> &'static str {
    if args.enable_trace {
        "warn,rdcom_rs=trace,reqwest=trace"
    } else if args.enable_debug {
        "warn,rdcom_rs=debug"
    } else {
        "warn"
    }
}
