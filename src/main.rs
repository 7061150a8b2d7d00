mod args;
use crate::args::{Args, Commands};

use base64::Engine;
use clap::Parser;
use easyslip::{
    api::{
        ApiClient, ApiClientError, ClientConfig, TrueWalletVerificationResponse,
        VerificationResponse,
    },
    Context,
};
use std::{path::Path, process::ExitCode};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| "slip.jpg".to_owned(), |name| name.to_string_lossy().into_owned())
}

fn print_slip(title: &str, slip: &VerificationResponse) {
    let data = &slip.data;
    println!("=== {title} ===");
    println!("Transaction Reference: {}", data.trans_ref);
    println!("Amount: {:.2}", data.amount.amount);
    println!("Date: {}", data.date.to_rfc3339());
    println!("Sender: {}", data.sender.display_name().unwrap_or("-"));
    println!("Receiver: {}", data.receiver.display_name().unwrap_or("-"));
}

fn print_truewallet(slip: &TrueWalletVerificationResponse) {
    let data = &slip.data;
    println!("=== Verify TrueMoney Wallet Slip ===");
    println!("Transaction ID: {}", data.transaction_id);
    println!("Amount: {:.2}", data.amount);
    println!("Date: {}", data.date.to_rfc3339());
    println!("Sender Name: {}", data.sender.name);
    println!("Receiver Name: {}", data.receiver.name);
    println!("Receiver Phone: {}", data.receiver.phone);
}

// Local failures (unreadable file) are `Err`, API outcomes are the inner result.
async fn run(
    client: &ApiClient,
    ctx: &Context,
    command: Commands,
) -> anyhow::Result<Result<(), ApiClientError>> {
    let outcome = match command {
        Commands::Slip { path } => {
            let file = tokio::fs::File::open(&path).await?;
            client
                .verify_slip(ctx, file, &file_name(&path))
                .await
                .map(|slip| print_slip("Verify Slip", &slip))
        }
        Commands::Truewallet { path } => {
            let file = tokio::fs::File::open(&path).await?;
            client
                .verify_truewallet_slip(ctx, file, &file_name(&path))
                .await
                .map(|slip| print_truewallet(&slip))
        }
        Commands::Payload { payload } => client
            .verify_slip_by_payload(ctx, &payload)
            .await
            .map(|slip| print_slip("Verify Slip By Payload", &slip)),
        Commands::Base64 { path } => {
            let image = tokio::fs::read(&path).await?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(image);
            client
                .verify_slip_by_base64(ctx, &encoded)
                .await
                .map(|slip| print_slip("Verify Slip By Base64 Image", &slip))
        }
    };
    Ok(outcome)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Args {
        token,
        base_url,
        user_agent,
        timeout,
        command,
    } = Args::parse();

    let config = ClientConfig::default()
        .with_base_url(base_url.as_str())
        .with_user_agent(user_agent)
        .with_timeout(timeout);
    let client = ApiClient::with_config(token, config)?;
    let ctx = Context::with_timeout(timeout);

    match run(&client, &ctx, command).await? {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ApiClientError::Api(err)) => {
            eprintln!("API error: {} (status: {})", err.message, err.status);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
