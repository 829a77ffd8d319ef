/// Key set document together with its content fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedJwks {
    /// Serialized JSON Web Key Set.
    pub jwks: String,
    /// Decimal FNV-1a fingerprint of `jwks`, usable as an external identifier.
    pub id: String,
}
