//! # Wallet-Auth Runtime
//!
//! ```bash
//! export WA_HMAC_SECRET=$(openssl rand -hex 32)
//! auth-runtime nonce
//! auth-runtime nonce-hash --address 0x... --nonce ...
//! auth-runtime verify --message-file msg.txt --signature 0x... --address 0x... --nonce-hash ...
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use auth_runtime::{run, Cli};
use wa_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_telemetry(&TelemetryConfig::from_env())?;

    let output = run(&cli)?;
    println!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
