use std::{path::PathBuf, time::Duration};

use easyslip::api::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use url::Url;

fn token_value_parser(raw: &str) -> Result<String, String> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("API token cannot be empty".to_string());
    }
    if token.chars().any(char::is_whitespace) {
        return Err("API token cannot contain whitespace".to_string());
    }
    Ok(token.to_string())
}

fn timeout_value_parser(raw: &str) -> Result<Duration, String> {
    let secs: u64 = raw
        .parse()
        .map_err(|_| format!("Invalid timeout: {raw}, expected whole seconds"))?;
    if secs == 0 {
        return Err("Timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

#[derive(clap::Parser)]
#[command(name = "easyslip")]
#[command(version)]
#[command(about = "Verify Thai bank and TrueMoney Wallet slips with the EasySlip API")]
#[command(long_about = "
A command-line client for the EasySlip slip verification API.

Examples:
  # Verify a bank slip image
  EASYSLIP_TOKEN=... easyslip slip ./slip.jpg

  # Verify a TrueMoney Wallet slip image
  easyslip --token ... truewallet ./truemoney_slip.jpg

  # Verify using the QR code payload printed on the slip
  easyslip payload 0041000600000101030040220014242082547BPM049885102TH9104xxxx

  # Send the image as base64 JSON instead of multipart
  easyslip base64 ./slip.jpg
")]
pub struct Args {
    /// EasySlip API token
    #[arg(long, env = "EASYSLIP_TOKEN", hide_env_values = true, value_parser = token_value_parser)]
    pub token: String,

    /// API base URL
    #[arg(long, env = "EASYSLIP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// User-Agent header sent with every request
    #[arg(long, env = "EASYSLIP_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECS", default_value = "10", value_parser = timeout_value_parser)]
    pub timeout: Duration,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Verify a bank slip image
    Slip {
        /// Path to the slip image
        #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Verify a TrueMoney Wallet slip image
    Truewallet {
        /// Path to the slip image
        #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },

    /// Verify a bank slip by the payload of its QR code
    Payload {
        /// Raw QR code payload
        payload: String,
    },

    /// Verify a bank slip image sent as base64 JSON
    Base64 {
        /// Path to the slip image
        #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },
}
