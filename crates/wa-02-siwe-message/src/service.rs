//! # SIWE Codec Service
//!
//! Implements `SiweCodecApi` over the domain functions and logs outcomes.

use crate::domain::canonical;
use crate::domain::entities::SiweMessage;
use crate::domain::errors::SiweError;
use crate::domain::{parser, validation};
use crate::ports::inbound::SiweCodecApi;
use chrono::{DateTime, Utc};
use tracing::debug;

/// SIWE Codec Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiweCodecService;

impl SiweCodecService {
    /// Create a new codec service.
    pub fn new() -> Self {
        Self
    }
}

impl SiweCodecApi for SiweCodecService {
    fn parse(&self, raw: &str) -> Result<SiweMessage, SiweError> {
        let result = parser::parse(raw);
        if let Err(error) = &result {
            debug!(%error, "SIWE message rejected by parser");
        }
        result
    }

    fn parse_canonical(&self, raw: &str) -> Result<SiweMessage, SiweError> {
        let result = canonical::parse_canonical(raw);
        match &result {
            Ok(message) => debug!(
                domain = %message.domain,
                nonce = %message.nonce,
                "SIWE message parsed"
            ),
            Err(error) => debug!(%error, "SIWE message rejected"),
        }
        result
    }

    fn validate(
        &self,
        message: &SiweMessage,
        expected_domain: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), SiweError> {
        let result = validation::validate(message, expected_domain, now);
        if let Err(error) = &result {
            debug!(%error, field = ?error.field(), "SIWE message failed validation");
        }
        result
    }
}
