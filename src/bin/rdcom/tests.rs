use chrono::{TimeZone, Utc};
use clap::Parser;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rdcom_rs::models::Token;
use rdcom_rs::{ConfigIssue, Error};

use crate::args::{Cli, Commands, OutputFormat, SmsGatewayCmd, TokenCmd};
use crate::client::{build_client, default_log_filter, CliError};
use crate::handlers;
use crate::print::{render_connection, render_gateway, render_token};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("rdcom").chain(args.iter().copied())).expect("valid args")
}

#[test]
fn parses_token_delete_with_many_ids() {
    let cli = parse(&["token", "delete", "a", "b", "c"]);
    match cli.command {
        Commands::Token(cmd) => match cmd.action {
            TokenCmd::Delete { ids } => assert_eq!(ids, vec!["a", "b", "c"]),
            other => panic!("unexpected action: {other:?}"),
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn token_delete_requires_an_id() {
    let err = Cli::try_parse_from(["rdcom", "token", "delete"]).expect_err("missing ids");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = parse(&[
        "sms-gateway",
        "list",
        "--account",
        "acme",
        "--format",
        "yaml",
        "--endpoint",
        "https://staging.example.com",
        "--enable-debug",
    ]);
    assert_eq!(cli.format, OutputFormat::Yaml);
    assert_eq!(cli.connection.endpoint, "https://staging.example.com");
    assert!(cli.connection.enable_debug);
    assert_eq!(default_log_filter(&cli.connection), "warn,rdcom_rs=debug");
    match cli.command {
        Commands::SmsGateway(cmd) => {
            let SmsGatewayCmd::List { account } = cmd.action;
            assert_eq!(account, "acme");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn conflicting_credentials_fail_to_build() {
    let cli = parse(&[
        "ping",
        "--endpoint",
        "https://platform.rdcom.com",
        "--token",
        "t",
        "--username",
        "u",
        "--password",
        "p",
    ]);
    let err = build_client(&cli.connection).expect_err("conflict");
    assert!(matches!(
        err,
        CliError::Api(Error::Config(ref issues)) if issues.contains(&ConfigIssue::ConflictingAuth)
    ));
}

#[test]
fn half_credentials_fail_to_build() {
    let mut cli = parse(&["ping", "--endpoint", "https://platform.rdcom.com"]);
    cli.connection.token = None;
    cli.connection.username = Some("u".to_string());
    cli.connection.password = None;

    let err = build_client(&cli.connection).expect_err("incomplete");
    assert!(matches!(
        err,
        CliError::Api(Error::Config(ref issues)) if issues.contains(&ConfigIssue::IncompleteCredentials)
    ));
}

#[test]
fn renders_plain_text() {
    colored::control::set_override(false);

    let forever = Token {
        token: "abc".to_string(),
        expiry_date: None,
    };
    assert_eq!(render_token(&forever), "token: abc (no expiration)");

    let expiring = Token {
        token: "def".to_string(),
        expiry_date: Some(Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap()),
    };
    assert_eq!(
        render_token(&expiring),
        "token: def (expires on 2030-01-02T03:04:05+00:00)"
    );

    assert_eq!(render_connection(true), "connection: OK");
    assert_eq!(render_connection(false), "connection: KO");

    let gateway = serde_json::from_value(json!({
        "id": 7,
        "gateway_type": "premium",
        "label": {"en": "Premium"},
        "prices": {"IT": 0.045}
    }))
    .unwrap();
    let text = render_gateway(&gateway);
    assert!(text.starts_with("gateway: 7\n"));
    assert!(text.contains("label (en)"));
    assert!(text.contains("0.045"));
}

#[tokio::test]
async fn token_delete_stops_at_first_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tokens/"))
        .and(body_json(json!({"token": "a"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "a"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tokens/"))
        .and(body_json(json!({"token": "b"})))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/tokens/"))
        .and(body_json(json!({"token": "c"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "c"})))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let cli = parse(&["token", "delete", "a", "b", "c", "--endpoint", &uri, "--token", "t"]);
    let client = build_client(&cli.connection).expect("client");

    let err = handlers::handle(&client, cli.command, cli.format)
        .await
        .expect_err("second delete fails");
    assert!(matches!(err, CliError::Api(Error::Api { status: 404, .. })));
}
