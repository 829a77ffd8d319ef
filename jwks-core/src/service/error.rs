use jwks_providers::key_algorithm::{error::KeyAlgorithmError, model::SigningAlgorithm};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JwksServiceError {
    #[error("Key algorithm error: `{0}`")]
    KeyAlgorithm(#[from] KeyAlgorithmError),
    #[error("Signing algorithm mismatch: configured `{expected}`, key requires `{actual}`")]
    AlgorithmMismatch {
        expected: SigningAlgorithm,
        actual: SigningAlgorithm,
    },
    #[error("Serialization error: `{0}`")]
    Serialization(#[from] serde_json::Error),
}
