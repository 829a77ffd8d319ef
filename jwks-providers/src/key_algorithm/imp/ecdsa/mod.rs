use ct_codecs::{Base64UrlSafeNoPadding, Encoder};
use p256::elliptic_curve::{
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey,
};
use p256::pkcs8::DecodePublicKey;
use spki::{Document, EncodePublicKey};

use crate::{
    common_models::{PublicKeyJwk, PublicKeyJwkEllipticData},
    key_algorithm::{
        error::KeyAlgorithmError,
        model::{EllipticCurve, KeyType, SigningAlgorithm},
        KeyAlgorithm,
    },
};

#[cfg(test)]
mod test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EcdsaKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    P521(p521::PublicKey),
}

impl EcdsaKey {
    /// Decodes SubjectPublicKeyInfo DER of a key on `curve`.
    pub fn from_public_key_der(
        curve: EllipticCurve,
        public_key_der: &[u8],
    ) -> Result<Self, KeyAlgorithmError> {
        let key = match curve {
            EllipticCurve::P256 => {
                p256::PublicKey::from_public_key_der(public_key_der).map(Self::P256)
            }
            EllipticCurve::P384 => {
                p384::PublicKey::from_public_key_der(public_key_der).map(Self::P384)
            }
            EllipticCurve::P521 => {
                p521::PublicKey::from_public_key_der(public_key_der).map(Self::P521)
            }
        };

        key.map_err(KeyAlgorithmError::KeyParse)
    }

    pub fn curve(&self) -> EllipticCurve {
        match self {
            Self::P256(_) => EllipticCurve::P256,
            Self::P384(_) => EllipticCurve::P384,
            Self::P521(_) => EllipticCurve::P521,
        }
    }
}

impl KeyAlgorithm for EcdsaKey {
    fn key_type(&self) -> KeyType {
        KeyType::Ec
    }

    fn signing_algorithm(&self) -> SigningAlgorithm {
        self.curve().signing_algorithm()
    }

    fn public_key_jwk(&self) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        let (x, y) = match self {
            Self::P256(key) => public_key_coordinates(key)?,
            Self::P384(key) => public_key_coordinates(key)?,
            Self::P521(key) => public_key_coordinates(key)?,
        };

        Ok(PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
            crv: self.curve(),
            x,
            y,
        }))
    }
}

impl EncodePublicKey for EcdsaKey {
    fn to_public_key_der(&self) -> spki::Result<Document> {
        match self {
            Self::P256(key) => key.to_public_key_der(),
            Self::P384(key) => key.to_public_key_der(),
            Self::P521(key) => key.to_public_key_der(),
        }
    }
}

/// Uncompressed affine coordinates of `key`, base64url encoded.
fn public_key_coordinates<C>(key: &PublicKey<C>) -> Result<(String, String), KeyAlgorithmError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let point = key.to_encoded_point(false);

    let x = point
        .x()
        .ok_or(KeyAlgorithmError::Encoding("X is missing".to_string()))?;
    let y = point
        .y()
        .ok_or(KeyAlgorithmError::Encoding("Y is missing".to_string()))?;

    Ok((
        Base64UrlSafeNoPadding::encode_to_string(&x[..])
            .map_err(|e| KeyAlgorithmError::Encoding(e.to_string()))?,
        Base64UrlSafeNoPadding::encode_to_string(&y[..])
            .map_err(|e| KeyAlgorithmError::Encoding(e.to_string()))?,
    ))
}
