use super::*;
use crate::key_algorithm::imp::public_key::decode_pem;

const P256_PEM: &str = include_str!("../../../../../test_data/p256.pem");
const P384_PEM: &str = include_str!("../../../../../test_data/p384.pem");
const P521_PEM: &str = include_str!("../../../../../test_data/p521.pem");

fn ecdsa_key(curve: EllipticCurve, pem: &str) -> EcdsaKey {
    EcdsaKey::from_public_key_der(curve, &decode_pem(pem).unwrap()).unwrap()
}

#[test]
fn test_signing_algorithm_follows_curve() {
    assert_eq!(
        SigningAlgorithm::Es256,
        ecdsa_key(EllipticCurve::P256, P256_PEM).signing_algorithm()
    );
    assert_eq!(
        SigningAlgorithm::Es384,
        ecdsa_key(EllipticCurve::P384, P384_PEM).signing_algorithm()
    );
    assert_eq!(
        SigningAlgorithm::Es512,
        ecdsa_key(EllipticCurve::P521, P521_PEM).signing_algorithm()
    );
}

#[test]
fn test_p256_public_key_jwk() {
    let jwk = ecdsa_key(EllipticCurve::P256, P256_PEM)
        .public_key_jwk()
        .unwrap();

    assert_eq!(
        PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
            crv: EllipticCurve::P256,
            x: "6GDI8fW9IHNg4kcUfmQ_5xZB3kKWwlIEoiwQPj4JkS4".to_string(),
            y: "9rjhAiqv0Yiz9E-p4lPN4JAmiiTLwMr7W-KOK2-AFGE".to_string(),
        }),
        jwk
    );
}

#[test]
fn test_p384_public_key_jwk() {
    let jwk = ecdsa_key(EllipticCurve::P384, P384_PEM)
        .public_key_jwk()
        .unwrap();

    assert_eq!(
        PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
            crv: EllipticCurve::P384,
            x: "3DL_Y9xOQY6DePF6j89K2jr8ReJ_xw4pC1ZSYVLQ8QDdeKt6ht9PLL6xBVnVX04M".to_string(),
            y: "3uHy0Gnn1Wjc1vya-vy9RwXedcpJ4CVt_bpzbKqQ_04ivdxjP3Tzop42Jn4oulwy".to_string(),
        }),
        jwk
    );
}

#[test]
fn test_p521_coordinates_keep_leading_zero_bits() {
    let jwk = ecdsa_key(EllipticCurve::P521, P521_PEM)
        .public_key_jwk()
        .unwrap();

    let PublicKeyJwk::Ec(data) = jwk else {
        panic!("expected EC key");
    };
    // 66 byte coordinates
    assert_eq!(88, data.x.len());
    assert_eq!(88, data.y.len());
    assert_eq!(
        "AStw4pzezWVV38K6muOSxd0ZzeXOCx5ESKr3DBo6-Mv5scSkqHlX0WXADel1jELiME72a7RcAGTLsYUj2J65VZYD",
        data.x
    );
}

#[test]
fn test_der_reencoding_is_canonical() {
    for (curve, pem) in [
        (EllipticCurve::P256, P256_PEM),
        (EllipticCurve::P384, P384_PEM),
        (EllipticCurve::P521, P521_PEM),
    ] {
        let der = decode_pem(pem).unwrap();

        let encoded = ecdsa_key(curve, pem).to_public_key_der().unwrap();

        assert_eq!(der, encoded.as_bytes(), "{curve}");
    }
}

#[test]
fn test_curve_mismatch_is_parse_error() {
    let der = decode_pem(P384_PEM).unwrap();

    let result = EcdsaKey::from_public_key_der(EllipticCurve::P256, &der);

    assert!(matches!(result, Err(KeyAlgorithmError::KeyParse(_))));
}
