//! # Wallet-Auth Runtime
//!
//! Command-line entry point for the authentication engine.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logging, metrics)
//! 2. Run the cryptographic self-test (any failure is fatal)
//! 3. Load configuration (only for commands that need the HMAC secret)
//! 4. Dispatch the subcommand

pub mod cli;

pub use cli::{Cli, Command};

use anyhow::{Context, Result};
use std::fs;
use tracing::{error, info};
use wa_03_authentication::{
    generate_nonce, run_self_test, AuthConfig, AuthenticationApi, AuthenticationService,
    ConfigError, SelfTestReport,
};
use wa_telemetry::gather_metrics;

/// What a command printed and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text for stdout
    pub text: String,
    /// Whether the process should exit with status 0
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

/// Run the self-test and refuse to continue if any primitive is broken.
pub fn startup_self_test() -> Result<SelfTestReport> {
    run_self_test()
        .inspect_err(|e| error!(error = %e, "refusing to start with unverified cryptography"))
        .context("cryptographic self-test failed")
}

/// Build the authentication configuration from CLI arguments and environment.
pub fn load_config(cli: &Cli) -> Result<AuthConfig> {
    let secret = cli.hmac_secret.as_deref().ok_or(ConfigError::MissingSecret)?;
    let config = AuthConfig::from_hex_secret(secret, cli.expected_domain.clone())
        .context("invalid authentication configuration")?;
    info!(expected_domain = ?config.expected_domain, "configuration loaded");
    Ok(config)
}

/// Execute one CLI invocation.
pub fn run(cli: &Cli) -> Result<CommandOutput> {
    let report = startup_self_test()?;

    match &cli.command {
        Command::SelfTest => Ok(CommandOutput::ok(format!(
            "self-test passed: {}",
            report.checks.join(", ")
        ))),

        Command::Nonce => Ok(CommandOutput::ok(generate_nonce())),

        Command::NonceHash { address, nonce } => {
            let service = AuthenticationService::new(load_config(cli)?);
            Ok(CommandOutput::ok(service.nonce_hash(address, nonce)))
        }

        Command::Verify {
            message_file,
            signature,
            address,
            nonce_hash,
        } => {
            let service = AuthenticationService::new(load_config(cli)?);
            let message = fs::read_to_string(message_file)
                .with_context(|| format!("failed to read {}", message_file.display()))?;

            let result = service.authenticate_siwe(&message, signature, address, nonce_hash);
            let text = serde_json::to_string_pretty(&serde_json::json!({
                "success": result.success,
                "recoveredAddress": result.recovered_address,
                "error": result.error_message(),
            }))?;
            Ok(CommandOutput {
                text,
                success: result.success,
            })
        }

        Command::Metrics => Ok(CommandOutput::ok(
            gather_metrics().context("failed to encode metrics")?,
        )),
    }
}
