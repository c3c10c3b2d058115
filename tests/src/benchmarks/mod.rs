//! # Wallet-Auth Benchmarks
//!
//! Criterion benchmark bodies per subsystem, driven from
//! `benches/auth_benchmarks.rs`.

pub mod wa_01_recovery;
pub mod wa_03_authentication;
