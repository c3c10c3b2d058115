//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that external callers use
//!
//! Recovery is self-contained, so there are no driven ports.

pub mod inbound;
