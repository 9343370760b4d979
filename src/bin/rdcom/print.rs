use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use rdcom_rs::models::{Account, SmsGateway, Token};

use crate::args::OutputFormat;
use crate::client::CliError;

const DATE_FORMAT: &str = "%A, %b %d, %Y at %H:%M:%S %Z";

pub fn print_error(err: &CliError) {
    eprintln!("error: {}", err.to_string().red());
}

pub fn print_connection(ok: bool) {
    println!("{}", render_connection(ok));
}

pub fn print_tokens(tokens: &[Token], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => tokens.iter().for_each(|t| println!("{}", render_token(t))),
        OutputFormat::Yaml => print_yaml(tokens)?,
    }
    Ok(())
}

pub fn print_accounts(accounts: &[Account], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => accounts.iter().for_each(|a| print!("{}", render_account(a))),
        OutputFormat::Yaml => print_yaml(accounts)?,
    }
    Ok(())
}

pub fn print_gateways(gateways: &[SmsGateway], format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => gateways.iter().for_each(|g| print!("{}", render_gateway(g))),
        OutputFormat::Yaml => print_yaml(gateways)?,
    }
    Ok(())
}

fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    print!("{}", serde_yaml::to_string(value)?);
    Ok(())
}

pub fn render_connection(ok: bool) -> String {
    let status = if ok { "OK".green() } else { "KO".red() };
    format!("connection: {status}")
}

pub fn render_token(token: &Token) -> String {
    match token.expiry_date {
        None => format!("token: {} (no expiration)", token.token.yellow()),
        Some(expiry) => format!(
            "token: {} (expires on {})",
            token.token.yellow(),
            expiry.to_rfc3339().yellow()
        ),
    }
}

pub fn render_account(account: &Account) -> String {
    let mut out = String::new();
    let info = &account.infos;

    let _ = writeln!(out, "account: {}", account.name.yellow());
    field(&mut out, 1, "code", account.code.as_str());
    field(&mut out, 1, "parent", account.parent.as_deref().unwrap_or(""));
    flag(&mut out, 1, "enabled", account.enabled);
    field(&mut out, 1, "creation", &date_or_none(account.created));
    field(&mut out, 1, "expiration", &date_or_none(account.expiration_date));
    field(&mut out, 1, "SMS credits", &account.sms_credits.to_string());
    field(&mut out, 1, "sender address", &account.sender_address);

    heading(&mut out, "main contact");
    field(&mut out, 2, "name", &info.main_contact_name);
    field(&mut out, 2, "surname", &info.main_contact_surname);
    field(&mut out, 2, "email", &info.main_contact_email);
    field(&mut out, 2, "mobile", &info.main_contact_cell);

    heading(&mut out, "representative");
    field(&mut out, 2, "name", &info.repr_name);
    field(&mut out, 2, "surname", &info.repr_surname);
    field(&mut out, 2, "email", &info.repr_email);

    heading(&mut out, "company");
    field(&mut out, 2, "name", &info.company);
    field(&mut out, 2, "address", &info.address);
    field(&mut out, 2, "city", &info.city);
    field(&mut out, 2, "state", &info.state);
    field(&mut out, 2, "country", &info.country);
    field(&mut out, 2, "ZIP code", &info.zip_code);

    heading(&mut out, "enablements");
    flag(&mut out, 2, "email preview", account.enable_email_preview);
    flag(&mut out, 2, "PDF attachments", account.enable_pdf_attachments);
    flag(&mut out, 2, "anti-spam check", account.enable_anti_spam_check);
    flag(&mut out, 2, "SMS unlimited credit", account.enable_sms_unlimited_credit);
    flag(&mut out, 2, "OTP SMS", account.enable_otp_sms);
    flag(&mut out, 2, "OTP email", account.enable_otp_email);

    out
}

pub fn render_gateway(gateway: &SmsGateway) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "gateway: {}", gateway.id.to_string().yellow());
    field(&mut out, 1, "type", &gateway.gateway_type);
    for (lang, label) in &gateway.label {
        field(&mut out, 1, &format!("label ({lang})"), label);
    }
    flag(&mut out, 1, "default", gateway.is_default);
    flag(&mut out, 1, "sender ready", gateway.sender_ready);
    flag(&mut out, 1, "two-way ready", gateway.twoway_ready);
    flag(&mut out, 1, "MO ready", gateway.mo_ready);
    flag(&mut out, 1, "RCS ready", gateway.rcs_ready);
    flag(&mut out, 1, "delivery reports", gateway.enable_sms_dlr);
    if !gateway.prices.is_empty() {
        heading(&mut out, "prices");
        for (destination, price) in &gateway.prices {
            field(&mut out, 2, destination, &price.to_string());
        }
    }

    out
}

fn heading(out: &mut String, name: &str) {
    let _ = writeln!(out, " - {name:<22} :");
}

fn field(out: &mut String, depth: usize, name: &str, value: &str) {
    let indent = " ".repeat(depth * 2 - 1);
    let width = 24 - depth * 2;
    let _ = writeln!(out, "{indent}- {name:<width$} : {}", value.yellow());
}

fn flag(out: &mut String, depth: usize, name: &str, value: bool) {
    let indent = " ".repeat(depth * 2 - 1);
    let width = 24 - depth * 2;
    let value = if value { "yes".green() } else { "no".red() };
    let _ = writeln!(out, "{indent}- {name:<width$} : {value}");
}

fn date_or_none(date: Option<DateTime<Utc>>) -> String {
    date.map_or_else(|| "none".to_string(), |d| d.format(DATE_FORMAT).to_string())
}
