//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{Address, BatchRecoveryResult, EthSignature, RecoveryRequest};
use crate::domain::errors::SignatureError;
use shared_crypto::Hash;

/// Primary Signature Recovery API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SignatureRecoveryApi: Send + Sync {
    /// Recover the signer of a personal message.
    ///
    /// # Security
    /// - Rejects signatures with high S values (EIP-2 malleability protection)
    /// - Never returns an address for a signature that failed any check
    fn recover_address(
        &self,
        message: &[u8],
        signature: &EthSignature,
    ) -> Result<Address, SignatureError>;

    /// Recover the signer of an already-hashed message.
    fn recover_from_prehash(
        &self,
        message_hash: &Hash,
        signature: &EthSignature,
    ) -> Result<Address, SignatureError>;

    /// Parse a hex signature and recover the signer of `message`.
    fn recover_address_hex(
        &self,
        message: &[u8],
        signature_hex: &str,
    ) -> Result<Address, SignatureError> {
        let signature = EthSignature::from_hex(signature_hex)?;
        self.recover_address(message, &signature)
    }

    /// Recover many signatures.
    ///
    /// # Performance
    /// Uses parallel processing for improved throughput.
    fn batch_recover(&self, requests: &[RecoveryRequest]) -> BatchRecoveryResult;
}
