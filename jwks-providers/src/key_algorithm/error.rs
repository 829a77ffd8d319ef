//! Enumerates errors related to public key parsing and key IDs.

use thiserror::Error;

use jwks_crypto::HasherError;

#[derive(Debug, Error)]
pub enum KeyAlgorithmError {
    #[error("Error decoding PEM content: `{0}`")]
    PemDecode(#[from] pem::PemError),
    #[error("Error parsing key content: `{0}`")]
    KeyParse(#[source] spki::Error),
    #[error("Public key was not RSA or ECDSA, but `{0}`")]
    UnsupportedKeyType(String),
    #[error("Unsupported elliptic curve: `{0}`")]
    UnsupportedCurve(String),
    #[error("Encoding error: `{0}`")]
    Encoding(String),
    #[error("Hasher error: `{0}`")]
    Hasher(#[from] HasherError),
}
