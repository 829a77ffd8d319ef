//! Parsing of public keys and their JSON Web Key representations.
//!
//! This crate turns SubjectPublicKeyInfo material into typed RSA and ECDSA
//! keys, selects the matching JWA signature algorithm, derives key IDs and
//! models the resulting JSON Web Key Set. Serializing the set is left to the
//! service layer.

pub mod common_dto;
pub mod common_mappers;
pub mod common_models;
pub mod key_algorithm;
