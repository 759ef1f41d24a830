//! Authentication module for meXBT API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature generation and the signed request envelope

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, PRIVATE_KEY_VAR,
    StaticCredentials, USER_ID_VAR,
};
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signature::{SignedEnvelope, sign_request};
