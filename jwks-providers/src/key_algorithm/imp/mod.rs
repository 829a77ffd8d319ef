//! Implementations of the supported key families.

pub mod ecdsa;
pub mod public_key;
pub mod rsa;
