//! # Ports Layer
//!
//! - **Inbound (Driving)**: API that the authentication service calls
//!
//! The codec reads nothing from outside, so there are no driven ports.

pub mod inbound;
