//! # Authentication Service
//!
//! Application service that implements `AuthenticationApi`.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`AuthenticationApi`)
//! - Drives the recovery and SIWE codec APIs of the lower subsystems
//! - Reads nonce records through the outbound `NonceStore` port when asked to

use crate::config::AuthConfig;
use crate::domain::errors::{AddressCheck, AuthError};
use crate::domain::nonce::{generate_nonce, nonce_hash};
use crate::domain::result::AuthenticationResult;
use crate::ports::inbound::AuthenticationApi;
use crate::ports::outbound::NonceStore;
use crate::self_test::{run_self_test, SelfTestError, SelfTestReport};
use chrono::{DateTime, Utc};
use shared_crypto::ct_eq;
use tracing::{debug, info, warn};
use wa_01_signature_recovery::{
    format_address, parse_address, SignatureRecoveryApi, SignatureRecoveryService,
};
use wa_02_siwe_message::{SiweCodecApi, SiweCodecService, SiweError, SiweField};
use wa_telemetry::{
    time_histogram, AUTH_ATTEMPTS, AUTH_DURATION, AUTH_FAILURES, NONCES_ISSUED,
    SIGNATURE_RECOVERIES,
};

/// Authentication Service.
///
/// Holds only immutable configuration and the stateless lower-layer APIs,
/// so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct AuthenticationService<R = SignatureRecoveryService, C = SiweCodecService>
where
    R: SignatureRecoveryApi,
    C: SiweCodecApi,
{
    config: AuthConfig,
    recovery: R,
    codec: C,
}

impl AuthenticationService {
    /// Create a service over the in-house recovery and codec.
    pub fn new(config: AuthConfig) -> Self {
        Self::with_components(config, SignatureRecoveryService::new(), SiweCodecService::new())
    }
}

impl<R, C> AuthenticationService<R, C>
where
    R: SignatureRecoveryApi,
    C: SiweCodecApi,
{
    /// Create a service over explicit recovery and codec implementations.
    pub fn with_components(config: AuthConfig, recovery: R, codec: C) -> Self {
        Self {
            config,
            recovery,
            codec,
        }
    }

    /// The service configuration.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// The six-step verification pipeline. Order matters: nothing from the
    /// message text is trusted until the signature over it has been checked.
    fn verify(
        &self,
        message: &str,
        signature: &str,
        expected_address: &str,
        stored_nonce_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        // 1. Recover the signer of the exact bytes presented
        let recovered = match self.recovery.recover_address_hex(message.as_bytes(), signature) {
            Ok(address) => {
                SIGNATURE_RECOVERIES.with_label_values(&["recovered"]).inc();
                address
            }
            Err(error) => {
                SIGNATURE_RECOVERIES.with_label_values(&["rejected"]).inc();
                return Err(error.into());
            }
        };
        debug!(recovered = %format_address(&recovered), "signature recovered");

        // 2. Recovered signer must be the claimed account
        let expected = parse_address(expected_address)
            .map_err(|e| AuthError::MalformedAddress(e.to_string()))?;
        if recovered != expected {
            return Err(AuthError::AddressMismatch {
                leg: AddressCheck::RecoveredSigner,
                expected: format_address(&expected),
                actual: format_address(&recovered),
            });
        }

        // 3. Parse; the signed bytes must be the canonical rendering
        let parsed = self.codec.parse_canonical(message)?;

        // 4. Message must name the same account
        let named = parse_address(&parsed.address).map_err(|e| SiweError::InvalidField {
            field: SiweField::Address,
            reason: e.to_string(),
        })?;
        if named != expected {
            return Err(AuthError::AddressMismatch {
                leg: AddressCheck::MessageAddress,
                expected: format_address(&expected),
                actual: format_address(&named),
            });
        }

        // 5. Domain, version, chain id, time window
        self.codec
            .validate(&parsed, self.config.expected_domain.as_deref(), now)?;

        // 6. Nonce was issued to this account
        let address = format_address(&expected);
        let computed = nonce_hash(self.config.hmac_secret(), &address, &parsed.nonce);
        if !ct_eq(computed.as_bytes(), stored_nonce_hash.as_bytes()) {
            return Err(AuthError::NonceMismatch);
        }

        Ok(address)
    }

    fn record(&self, result: Result<String, AuthError>) -> AuthenticationResult {
        match &result {
            Ok(address) => {
                AUTH_ATTEMPTS.with_label_values(&["success"]).inc();
                info!(address = %address, "SIWE authentication succeeded");
            }
            Err(error) => {
                AUTH_ATTEMPTS.with_label_values(&["failure"]).inc();
                AUTH_FAILURES.with_label_values(&[error.reason()]).inc();
                warn!(reason = error.reason(), error = %error, "SIWE authentication rejected");
            }
        }
        result.into()
    }

    fn lookup_nonce_hash(
        &self,
        store: &dyn NonceStore,
        address: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let key = parse_address(address)
            .map(|parsed| format_address(&parsed))
            .map_err(|e| AuthError::MalformedAddress(e.to_string()))?;

        let record = store
            .nonce_record(&key)?
            .ok_or_else(|| AuthError::NonceNotFound(key.clone()))?;
        if record.is_expired(now) {
            return Err(AuthError::NonceExpired {
                expired_at: record.expires_at,
            });
        }
        Ok(record.nonce_hash)
    }
}

impl<R, C> AuthenticationApi for AuthenticationService<R, C>
where
    R: SignatureRecoveryApi,
    C: SiweCodecApi,
{
    fn generate_nonce(&self) -> String {
        NONCES_ISSUED.inc();
        generate_nonce()
    }

    fn nonce_hash(&self, address: &str, nonce: &str) -> String {
        nonce_hash(self.config.hmac_secret(), address, nonce)
    }

    fn authenticate_siwe_at(
        &self,
        message: &str,
        signature: &str,
        expected_address: &str,
        stored_nonce_hash: &str,
        now: DateTime<Utc>,
    ) -> AuthenticationResult {
        let _timer = time_histogram!(AUTH_DURATION);
        let result = self.verify(message, signature, expected_address, stored_nonce_hash, now);
        self.record(result)
    }

    fn authenticate_with_store(
        &self,
        store: &dyn NonceStore,
        message: &str,
        signature: &str,
        address: &str,
        now: DateTime<Utc>,
    ) -> AuthenticationResult {
        match self.lookup_nonce_hash(store, address, now) {
            Ok(stored) => self.authenticate_siwe_at(message, signature, address, &stored, now),
            Err(error) => self.record(Err(error)),
        }
    }

    fn self_test(&self) -> Result<SelfTestReport, SelfTestError> {
        run_self_test()
    }
}
