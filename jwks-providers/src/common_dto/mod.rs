use serde::{Deserialize, Serialize};

use crate::key_algorithm::model::{EllipticCurve, KeyType, SigningAlgorithm};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwkSetDTO {
    pub keys: Vec<JsonWebKeyDTO>,
}

/// Flat JWK member layout.
///
/// Member order is part of the output format: `use`, `kty`, `kid`, `crv`,
/// `alg`, then the key parameters. Members a key type does not define are
/// omitted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWebKeyDTO {
    pub r#use: String,
    pub kty: KeyType,
    pub kid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<EllipticCurve>,
    pub alg: SigningAlgorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
}
