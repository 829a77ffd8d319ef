use ct_codecs::{Base64UrlSafeNoPadding, Encoder};
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use spki::{Document, EncodePublicKey};

use crate::{
    common_models::{PublicKeyJwk, PublicKeyJwkRsaData},
    key_algorithm::{
        error::KeyAlgorithmError,
        model::{KeyType, SigningAlgorithm},
        KeyAlgorithm,
    },
};


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKey {
    public_key: RsaPublicKey,
}

impl RsaKey {
    pub fn from_public_key_der(public_key_der: &[u8]) -> Result<Self, KeyAlgorithmError> {
        let public_key = RsaPublicKey::from_public_key_der(public_key_der)
            .map_err(KeyAlgorithmError::KeyParse)?;

        Ok(Self { public_key })
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.public_key.n().bits()
    }
}

impl KeyAlgorithm for RsaKey {
    fn key_type(&self) -> KeyType {
        KeyType::Rsa
    }

    // Modulus size does not select RS384/RS512; there is no agreed threshold table.
    fn signing_algorithm(&self) -> SigningAlgorithm {
        SigningAlgorithm::Rs256
    }

    fn public_key_jwk(&self) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        let n = Base64UrlSafeNoPadding::encode_to_string(self.public_key.n().to_bytes_be())
            .map_err(|err| KeyAlgorithmError::Encoding(err.to_string()))?;
        let e = Base64UrlSafeNoPadding::encode_to_string(self.public_key.e().to_bytes_be())
            .map_err(|err| KeyAlgorithmError::Encoding(err.to_string()))?;

        Ok(PublicKeyJwk::Rsa(PublicKeyJwkRsaData { e, n }))
    }
}

impl EncodePublicKey for RsaKey {
    fn to_public_key_der(&self) -> spki::Result<Document> {
        self.public_key.to_public_key_der()
    }
}
