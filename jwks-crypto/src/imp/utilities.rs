const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of `input`.
///
/// A content fingerprint only. It carries no collision resistance beyond
/// ordinary 32-bit distribution and must not be used where a cryptographic
/// digest is expected.
pub fn fnv1a_32(input: &[u8]) -> u32 {
    input.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
