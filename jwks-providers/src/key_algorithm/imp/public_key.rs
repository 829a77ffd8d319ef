//! PEM decoding and SubjectPublicKeyInfo classification.
//!
//! Only the first PEM block of the input is read. Its label is not enforced;
//! the payload must be SubjectPublicKeyInfo DER for an RSA key or an ECDSA key
//! on one of the curves in [`EllipticCurve`].

use spki::{ObjectIdentifier, SubjectPublicKeyInfoRef};

use super::{ecdsa::EcdsaKey, rsa::RsaKey};
use crate::key_algorithm::{error::KeyAlgorithmError, model::EllipticCurve, ParsedPublicKey};

const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

const SUPPORTED_CURVES: [(ObjectIdentifier, EllipticCurve); 3] = [
    (SECP256R1, EllipticCurve::P256),
    (SECP384R1, EllipticCurve::P384),
    (SECP521R1, EllipticCurve::P521),
];

const KNOWN_CURVE_NAMES: [(ObjectIdentifier, &str); 5] = [
    (ObjectIdentifier::new_unwrap("1.3.132.0.33"), "P-224"),
    (ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.1"), "P-192"),
    (ObjectIdentifier::new_unwrap("1.3.132.0.10"), "secp256k1"),
    (ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.7"), "brainpoolP256r1"),
    (ObjectIdentifier::new_unwrap("1.3.36.3.3.2.8.1.1.11"), "brainpoolP384r1"),
];

const KNOWN_KEY_TYPE_NAMES: [(ObjectIdentifier, &str); 7] = [
    (ObjectIdentifier::new_unwrap("1.3.101.112"), "Ed25519"),
    (ObjectIdentifier::new_unwrap("1.3.101.113"), "Ed448"),
    (ObjectIdentifier::new_unwrap("1.3.101.110"), "X25519"),
    (ObjectIdentifier::new_unwrap("1.3.101.111"), "X448"),
    (ObjectIdentifier::new_unwrap("1.2.840.10040.4.1"), "DSA"),
    (ObjectIdentifier::new_unwrap("1.2.840.10046.2.1"), "DH"),
    (ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10"), "RSASSA-PSS"),
];

/// Returns the DER payload of the first PEM block in `input`.
pub fn decode_pem(input: &str) -> Result<Vec<u8>, KeyAlgorithmError> {
    let block = pem::parse(input)?;

    if block.tag() != PUBLIC_KEY_LABEL {
        tracing::debug!(
            label = block.tag(),
            "Unexpected PEM label, reading payload as SubjectPublicKeyInfo"
        );
    }

    Ok(block.into_contents())
}

pub fn parse_public_key_pem(input: &str) -> Result<ParsedPublicKey, KeyAlgorithmError> {
    let public_key_der = decode_pem(input)?;

    parse_public_key_der(&public_key_der)
}

pub fn parse_public_key_der(public_key_der: &[u8]) -> Result<ParsedPublicKey, KeyAlgorithmError> {
    let info =
        SubjectPublicKeyInfoRef::try_from(public_key_der).map_err(KeyAlgorithmError::KeyParse)?;
    let algorithm = info.algorithm.oid;

    if algorithm == RSA_ENCRYPTION {
        let key = RsaKey::from_public_key_der(public_key_der)?;
        tracing::debug!(bits = key.bits(), "Parsed RSA public key");

        Ok(ParsedPublicKey::Rsa(key))
    } else if algorithm == ID_EC_PUBLIC_KEY {
        let named_curve = info
            .algorithm
            .parameters_oid()
            .map_err(KeyAlgorithmError::KeyParse)?;
        let curve = supported_curve(named_curve)?;
        tracing::debug!(%curve, "Parsed ECDSA public key");

        Ok(ParsedPublicKey::Ecdsa(EcdsaKey::from_public_key_der(
            curve,
            public_key_der,
        )?))
    } else {
        Err(KeyAlgorithmError::UnsupportedKeyType(display_name(
            &KNOWN_KEY_TYPE_NAMES,
            algorithm,
        )))
    }
}

fn supported_curve(named_curve: ObjectIdentifier) -> Result<EllipticCurve, KeyAlgorithmError> {
    SUPPORTED_CURVES
        .iter()
        .find(|(oid, _)| *oid == named_curve)
        .map(|(_, curve)| *curve)
        .ok_or_else(|| {
            KeyAlgorithmError::UnsupportedCurve(display_name(&KNOWN_CURVE_NAMES, named_curve))
        })
}

fn display_name(names: &[(ObjectIdentifier, &str)], oid: ObjectIdentifier) -> String {
    names
        .iter()
        .find(|(known, _)| *known == oid)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| oid.to_string())
}
