//! Tools for classifying public keys and describing them as JWKs.
//!
//! A PEM document is decoded into a [`ParsedPublicKey`], a closed set of the
//! key families that can sign JWTs. Each family knows its JWA signature
//! algorithm and its JWK parameters. Key IDs are derived in [`key_id`].

use spki::{Document, EncodePublicKey};

use error::KeyAlgorithmError;
use imp::{ecdsa::EcdsaKey, rsa::RsaKey};
use model::{KeyType, SigningAlgorithm};

use crate::common_models::PublicKeyJwk;

pub mod error;
pub mod imp;
pub mod key_id;
pub mod model;

/// Signature algorithm and JWK parameters of a public key.
pub trait KeyAlgorithm: Send + Sync {
    /// Value of the `kty` member.
    fn key_type(&self) -> KeyType;

    /// Algorithm to advertise in the `alg` member.
    fn signing_algorithm(&self) -> SigningAlgorithm;

    /// Type specific JWK parameters, base64url encoded.
    fn public_key_jwk(&self) -> Result<PublicKeyJwk, KeyAlgorithmError>;
}

/// Public key decoded from SubjectPublicKeyInfo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedPublicKey {
    Rsa(RsaKey),
    Ecdsa(EcdsaKey),
}

impl ParsedPublicKey {
    /// Decodes the first PEM block of `input`.
    pub fn from_pem(input: &str) -> Result<Self, KeyAlgorithmError> {
        imp::public_key::parse_public_key_pem(input)
    }

    /// Decodes SubjectPublicKeyInfo DER.
    pub fn from_der(der: &[u8]) -> Result<Self, KeyAlgorithmError> {
        imp::public_key::parse_public_key_der(der)
    }

    fn key_algorithm(&self) -> &dyn KeyAlgorithm {
        match self {
            Self::Rsa(key) => key,
            Self::Ecdsa(key) => key,
        }
    }
}

impl KeyAlgorithm for ParsedPublicKey {
    fn key_type(&self) -> KeyType {
        self.key_algorithm().key_type()
    }

    fn signing_algorithm(&self) -> SigningAlgorithm {
        self.key_algorithm().signing_algorithm()
    }

    fn public_key_jwk(&self) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        self.key_algorithm().public_key_jwk()
    }
}

impl EncodePublicKey for ParsedPublicKey {
    fn to_public_key_der(&self) -> spki::Result<Document> {
        match self {
            Self::Rsa(key) => key.to_public_key_der(),
            Self::Ecdsa(key) => key.to_public_key_der(),
        }
    }
}
