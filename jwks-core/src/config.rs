use jwks_providers::key_algorithm::model::SigningAlgorithm;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwksConfig {
    /// Algorithm the caller expects the key to sign with. Conversion fails
    /// when the key calls for a different one.
    #[serde(default)]
    pub signing_algorithm: Option<SigningAlgorithm>,
}
