//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that web handlers and the runtime call
//! - **Outbound (Driven)**: the nonce store owned by the host application

pub mod inbound;
pub mod outbound;
