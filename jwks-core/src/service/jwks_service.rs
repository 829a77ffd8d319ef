//! A service for publishing PEM-encoded signing keys as JSON Web Key Sets.
//!
//! Every call is independent: the service keeps no record of keys it has
//! converted, so a single instance can be shared between threads.

use std::sync::Arc;

use jwks_crypto::{imp::utilities::fnv1a_32, Hasher};
use jwks_providers::{
    common_dto::JwkSetDTO,
    common_models::{JsonWebKey, KeySet},
    key_algorithm::{
        key_id::key_id_from_public_key, model::SigningAlgorithm, KeyAlgorithm, ParsedPublicKey,
    },
};

use super::error::JwksServiceError;
use crate::{config::JwksConfig, model::ExtractedJwks};

pub struct JwksService {
    pub hasher: Arc<dyn Hasher>,
    pub config: JwksConfig,
}

impl JwksService {
    pub fn new(hasher: Arc<dyn Hasher>, config: JwksConfig) -> Self {
        Self { hasher, config }
    }

    /// Converts the first PEM block of `pem` into a serialized key set
    /// holding that single key.
    pub fn convert(&self, pem: &str) -> Result<Vec<u8>, JwksServiceError> {
        let key_set = self.key_set(pem)?;

        Ok(serde_json::to_vec(&key_set)?)
    }

    /// Same as [`Self::convert`], paired with the fingerprint of the output.
    pub fn extract(&self, pem: &str) -> Result<ExtractedJwks, JwksServiceError> {
        let jwks = serde_json::to_string(&self.key_set(pem)?)?;
        let id = Self::fingerprint(jwks.as_bytes()).to_string();

        Ok(ExtractedJwks { jwks, id })
    }

    /// Non-cryptographic content fingerprint of serialized key set bytes.
    pub fn fingerprint(jwks: &[u8]) -> u32 {
        fnv1a_32(jwks)
    }

    fn key_set(&self, pem: &str) -> Result<JwkSetDTO, JwksServiceError> {
        let public_key = ParsedPublicKey::from_pem(pem)?;

        let alg = public_key.signing_algorithm();
        self.check_signing_algorithm(alg)?;

        let kid = key_id_from_public_key(&public_key, self.hasher.as_ref())?;
        tracing::debug!(kty = %public_key.key_type(), %alg, %kid, "Extracted signing key");

        let jwk = JsonWebKey::signing_key(public_key.public_key_jwk()?, kid, alg);

        Ok(KeySet { keys: vec![jwk] }.into())
    }

    fn check_signing_algorithm(&self, actual: SigningAlgorithm) -> Result<(), JwksServiceError> {
        match self.config.signing_algorithm {
            Some(expected) if expected != actual => {
                tracing::warn!(%expected, %actual, "Configured signing algorithm does not match key");
                Err(JwksServiceError::AlgorithmMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }
}
