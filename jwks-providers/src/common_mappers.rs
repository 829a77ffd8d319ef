use crate::{
    common_dto::{JsonWebKeyDTO, JwkSetDTO},
    common_models::{JsonWebKey, KeySet, PublicKeyJwk},
};

impl From<JsonWebKey> for JsonWebKeyDTO {
    fn from(value: JsonWebKey) -> Self {
        let kty = value.key.key_type();
        let mut dto = Self {
            r#use: value.r#use,
            kty,
            kid: value.kid,
            crv: None,
            alg: value.alg,
            x: None,
            y: None,
            n: None,
            e: None,
        };

        match value.key {
            PublicKeyJwk::Ec(data) => {
                dto.crv = Some(data.crv);
                dto.x = Some(data.x);
                dto.y = Some(data.y);
            }
            PublicKeyJwk::Rsa(data) => {
                dto.n = Some(data.n);
                dto.e = Some(data.e);
            }
        }

        dto
    }
}

impl From<KeySet> for JwkSetDTO {
    fn from(value: KeySet) -> Self {
        Self {
            keys: value.keys.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        common_models::{PublicKeyJwkEllipticData, PublicKeyJwkRsaData},
        key_algorithm::model::{EllipticCurve, SigningAlgorithm},
    };

    #[test]
    fn test_ec_key_member_order() {
        let set = KeySet {
            keys: vec![JsonWebKey::signing_key(
                PublicKeyJwk::Ec(PublicKeyJwkEllipticData {
                    crv: EllipticCurve::P384,
                    x: "eA".to_string(),
                    y: "eQ".to_string(),
                }),
                "kid".to_string(),
                SigningAlgorithm::Es384,
            )],
        };

        let json = serde_json::to_string(&JwkSetDTO::from(set)).unwrap();

        assert_eq!(
            r#"{"keys":[{"use":"sig","kty":"EC","kid":"kid","crv":"P-384","alg":"ES384","x":"eA","y":"eQ"}]}"#,
            json
        );
    }

    #[test]
    fn test_rsa_key_member_order() {
        let set = KeySet {
            keys: vec![JsonWebKey::signing_key(
                PublicKeyJwk::Rsa(PublicKeyJwkRsaData {
                    e: "AQAB".to_string(),
                    n: "bg".to_string(),
                }),
                "kid".to_string(),
                SigningAlgorithm::Rs256,
            )],
        };

        let json = serde_json::to_string(&JwkSetDTO::from(set)).unwrap();

        assert_eq!(
            r#"{"keys":[{"use":"sig","kty":"RSA","kid":"kid","alg":"RS256","n":"bg","e":"AQAB"}]}"#,
            json
        );
    }

    #[test]
    fn test_dto_deserializes_from_published_document() {
        let dto: JwkSetDTO = serde_json::from_str(
            r#"{"keys":[{"use":"sig","kty":"EC","kid":"k","crv":"P-521","alg":"ES512","x":"eA","y":"eQ"}]}"#,
        )
        .unwrap();

        let key = &dto.keys[0];
        assert_eq!(Some(EllipticCurve::P521), key.crv);
        assert_eq!(SigningAlgorithm::Es512, key.alg);
        assert_eq!(None, key.n);
    }
}
