use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

/// JWA signature algorithm advertised in the `alg` member.
///
/// Parsing ignores ASCII case, so `es256` and `Rs384` are accepted.
#[derive(
    Debug,
    Copy,
    Clone,
    Display,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
#[strum(ascii_case_insensitive)]
pub enum SigningAlgorithm {
    #[strum(serialize = "RS256")]
    Rs256,
    #[strum(serialize = "RS384")]
    Rs384,
    #[strum(serialize = "RS512")]
    Rs512,
    #[strum(serialize = "ES256")]
    Es256,
    #[strum(serialize = "ES384")]
    Es384,
    #[strum(serialize = "ES512")]
    Es512,
}

impl SigningAlgorithm {
    pub fn key_type(&self) -> KeyType {
        match self {
            Self::Rs256 | Self::Rs384 | Self::Rs512 => KeyType::Rsa,
            Self::Es256 | Self::Es384 | Self::Es512 => KeyType::Ec,
        }
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    Display,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum KeyType {
    #[strum(serialize = "RSA")]
    Rsa,
    #[strum(serialize = "EC")]
    Ec,
}

/// Curves accepted for ECDSA signing keys.
#[derive(
    Debug,
    Copy,
    Clone,
    Display,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum EllipticCurve {
    #[strum(serialize = "P-256")]
    P256,
    #[strum(serialize = "P-384")]
    P384,
    #[strum(serialize = "P-521")]
    P521,
}

impl EllipticCurve {
    pub fn signing_algorithm(&self) -> SigningAlgorithm {
        match self {
            Self::P256 => SigningAlgorithm::Es256,
            Self::P384 => SigningAlgorithm::Es384,
            Self::P521 => SigningAlgorithm::Es512,
        }
    }
}
