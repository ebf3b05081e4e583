//! Test driver: reads a JSON description of one transaction, builds it
//! with `dmbc-chain`, and writes the resulting canonical encoding as
//! lower-case hex (no trailing newline).
//!
//! This binary is glue, not the core — all wire-format logic lives in
//! `dmbc-chain`.

mod dispatch;
mod error;
mod input;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use error::CliError;

#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
enum TransactionKind {
    AddAssets,
    DeleteAssets,
    Transfer,
    TransferFeesPayer,
    Exchange,
    ExchangeIntermediary,
    Trade,
    TradeIntermediary,
    AskOffer,
    BidOffer,
}

#[derive(Debug, Parser)]
#[command(name = "dmbc-cli", about = "Build a dmbc transaction from JSON and print its canonical hex encoding")]
struct Cli {
    transaction: TransactionKind,
    input_file: PathBuf,
    output_file: PathBuf,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let raw = fs::read_to_string(&cli.input_file)?;

    let bytes = match cli.transaction {
        TransactionKind::AddAssets => dispatch::add_assets(serde_json::from_str(&raw)?)?,
        TransactionKind::DeleteAssets => dispatch::delete_assets(serde_json::from_str(&raw)?)?,
        TransactionKind::Transfer => dispatch::transfer(serde_json::from_str(&raw)?)?,
        TransactionKind::TransferFeesPayer => {
            dispatch::transfer_fees_payer(serde_json::from_str(&raw)?)?
        }
        TransactionKind::Exchange => dispatch::exchange(serde_json::from_str(&raw)?)?,
        TransactionKind::ExchangeIntermediary => {
            dispatch::exchange_intermediary(serde_json::from_str(&raw)?)?
        }
        TransactionKind::Trade => dispatch::trade(serde_json::from_str(&raw)?)?,
        TransactionKind::TradeIntermediary => {
            dispatch::trade_intermediary(serde_json::from_str(&raw)?)?
        }
        TransactionKind::AskOffer => dispatch::ask_offer(serde_json::from_str(&raw)?)?,
        TransactionKind::BidOffer => dispatch::bid_offer(serde_json::from_str(&raw)?)?,
    };

    fs::write(&cli.output_file, hex::encode(bytes))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(parse_err) => {
            let err = CliError::Usage(parse_err.to_string());
            eprintln!("{}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
