//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wallet-Auth: Sign-In With Ethereum verification engine
#[derive(Parser, Debug)]
#[command(name = "auth-runtime")]
#[command(about = "Issue nonces and verify Sign-In With Ethereum messages")]
#[command(version)]
pub struct Cli {
    /// Hex-encoded HMAC secret for nonce hashes (at least 32 bytes)
    #[arg(long, env = "WA_HMAC_SECRET", hide_env_values = true, global = true)]
    pub hmac_secret: Option<String>,

    /// Domain that SIWE messages must name
    #[arg(long, env = "WA_EXPECTED_DOMAIN", global = true)]
    pub expected_domain: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the cryptographic self-test and report the checks
    SelfTest,

    /// Print a fresh nonce
    Nonce,

    /// Print the nonce hash to store for an address
    NonceHash {
        /// Wallet address (0x + 40 hex digits)
        #[arg(long)]
        address: String,

        /// Nonce previously issued to the address
        #[arg(long)]
        nonce: String,
    },

    /// Verify a signed SIWE message
    Verify {
        /// File holding the exact signed message text
        #[arg(long)]
        message_file: PathBuf,

        /// 65-byte signature, hex, optional 0x
        #[arg(long)]
        signature: String,

        /// Address claiming to have signed
        #[arg(long)]
        address: String,

        /// Nonce hash stored when the nonce was issued
        #[arg(long)]
        nonce_hash: String,
    },

    /// Print Prometheus metrics in text format
    Metrics,
}
