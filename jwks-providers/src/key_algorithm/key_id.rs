//! Key IDs derived from public key material.
//!
//! The ID is the unpadded base64url SHA-256 digest of the SubjectPublicKeyInfo
//! DER encoding, the same convention Kubernetes uses for service account
//! signing keys.

use jwks_crypto::Hasher;
use spki::EncodePublicKey;

use super::error::KeyAlgorithmError;

pub fn key_id_from_public_key(
    public_key: &impl EncodePublicKey,
    hasher: &dyn Hasher,
) -> Result<String, KeyAlgorithmError> {
    let public_key_der = public_key.to_public_key_der().map_err(|err| {
        KeyAlgorithmError::Encoding(format!(
            "failed to serialize public key to DER format: {err}"
        ))
    })?;

    Ok(hasher.hash_base64(public_key_der.as_bytes())?)
}
