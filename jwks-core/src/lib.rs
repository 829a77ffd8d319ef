//! Publishes PEM-encoded public keys as JSON Web Key Sets.
//!
//! The output is the `keys` document OIDC providers and JWT issuers expose
//! for signature discovery. Each conversion takes one RSA or ECDSA public key
//! and yields a set with exactly one signing key:
//!
//! ```text
//! {"keys":[{"use":"sig","kty":"EC","kid":"...","crv":"P-256","alg":"ES256","x":"...","y":"..."}]}
//! ```
//!
//! ## Repository structure
//!
//! * **Crypto**: SHA-256 for key IDs and FNV-1a fingerprints
//! * **Providers**: PEM and SubjectPublicKeyInfo parsing, algorithm selection,
//!   key IDs and JWK models
//! * **Core**: the [JWKS service][service] and its configuration
//!
//! ## Getting started
//!
//! ```ignore rust
//! let jwks = jwks_core::convert(pem)?;
//! let id = jwks_core::fingerprint(&jwks);
//! ```
//!
//! Or, with an expected algorithm configured:
//!
//! ```ignore rust
//! let core = JwksCore::new(Some(JwksConfig {
//!     signing_algorithm: Some(SigningAlgorithm::Es256),
//! }));
//! let extracted = core.jwks_service.extract(pem)?;
//! ```
//!
//! Key IDs follow the Kubernetes service account convention: the unpadded
//! base64url SHA-256 digest of the key's SubjectPublicKeyInfo DER.
//!
//! [service]: service::jwks_service::JwksService

use std::sync::Arc;

use jwks_crypto::imp::hasher::sha256::SHA256;

use config::JwksConfig;
use service::{error::JwksServiceError, jwks_service::JwksService};

pub mod config;
pub mod model;
pub mod service;

pub struct JwksCore {
    pub jwks_service: JwksService,
}

impl Default for JwksCore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl JwksCore {
    pub fn new(config: Option<JwksConfig>) -> Self {
        let config = config.unwrap_or_default();

        let jwks_service = JwksService::new(Arc::new(SHA256 {}), config);

        Self { jwks_service }
    }
}

/// Converts the first PEM block of `pem` into a serialized one-key JWKS.
pub fn convert(pem: &str) -> Result<Vec<u8>, JwksServiceError> {
    JwksCore::default().jwks_service.convert(pem)
}

/// FNV-1a 32-bit fingerprint of serialized key set bytes.
pub fn fingerprint(bytes: &[u8]) -> u32 {
    JwksService::fingerprint(bytes)
}
