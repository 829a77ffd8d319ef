use crate::key_algorithm::model::{EllipticCurve, KeyType, SigningAlgorithm};

/// `use` value of keys that verify signatures.
pub const SIG: &str = "sig";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKeyJwk {
    Ec(PublicKeyJwkEllipticData),
    Rsa(PublicKeyJwkRsaData),
}

impl PublicKeyJwk {
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKeyJwk::Ec(_) => KeyType::Ec,
            PublicKeyJwk::Rsa(_) => KeyType::Rsa,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyJwkRsaData {
    pub e: String,
    pub n: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyJwkEllipticData {
    pub crv: EllipticCurve,
    pub x: String,
    pub y: String,
}

/// Signature verification key as published in a key set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonWebKey {
    pub key: PublicKeyJwk,
    pub kid: String,
    pub alg: SigningAlgorithm,
    pub r#use: String,
}

impl JsonWebKey {
    pub fn signing_key(key: PublicKeyJwk, kid: String, alg: SigningAlgorithm) -> Self {
        Self {
            key,
            kid,
            alg,
            r#use: SIG.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySet {
    pub keys: Vec<JsonWebKey>,
}
