pub mod error;
pub mod jwks_service;
