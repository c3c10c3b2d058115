//! # Signature Recovery Service
//!
//! Application service layer that implements the `SignatureRecoveryApi` trait
//! and delegates the arithmetic to the domain layer.

use crate::domain::entities::{
    format_address, Address, BatchRecoveryResult, EthSignature, RecoveryRequest,
};
use crate::domain::errors::SignatureError;
use crate::domain::recovery;
use crate::ports::inbound::SignatureRecoveryApi;
use shared_crypto::Hash;
use tracing::debug;

/// Signature Recovery Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureRecoveryService;

impl SignatureRecoveryService {
    /// Create a new signature recovery service.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureRecoveryApi for SignatureRecoveryService {
    fn recover_address(
        &self,
        message: &[u8],
        signature: &EthSignature,
    ) -> Result<Address, SignatureError> {
        let result = recovery::recover_address(message, signature);
        match &result {
            Ok(address) => debug!(address = %format_address(address), "signature recovered"),
            Err(error) => debug!(%error, "signature recovery failed"),
        }
        result
    }

    fn recover_from_prehash(
        &self,
        message_hash: &Hash,
        signature: &EthSignature,
    ) -> Result<Address, SignatureError> {
        recovery::recover_from_prehash(message_hash, signature)
    }

    fn batch_recover(&self, requests: &[RecoveryRequest]) -> BatchRecoveryResult {
        let result = recovery::batch_recover(requests);
        debug!(
            total = requests.len(),
            valid = result.valid_count,
            invalid = result.invalid_count,
            "batch recovery complete"
        );
        result
    }
}
