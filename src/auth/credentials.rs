//! Credential management for meXBT API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::MexbtError;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "MEXBT_API_KEY";
/// Default environment variable holding the private signing key.
pub const PRIVATE_KEY_VAR: &str = "MEXBT_PRIVATE_KEY";
/// Default environment variable holding the account user id.
pub const USER_ID_VAR: &str = "MEXBT_USER_ID";

/// API credentials: the public key, the private signing key and the account id.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier, sent with every private request)
    pub api_key: String,
    /// The account/user identifier (part of the signed message)
    pub user_id: String,
    /// The private key (used for signing, never transmitted)
    private_key: SecretString,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(
        api_key: impl Into<String>,
        private_key: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            user_id: user_id.into(),
            private_key: SecretString::from(private_key.into()),
        }
    }

    /// Get the private key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.private_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("user_id", &self.user_id)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        private_key: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, private_key, user_id),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `MEXBT_API_KEY`, `MEXBT_PRIVATE_KEY` and `MEXBT_USER_ID`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, MexbtError> {
        Self::from_env_vars(API_KEY_VAR, PRIVATE_KEY_VAR, USER_ID_VAR)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(
        key_var: &str,
        private_key_var: &str,
        user_id_var: &str,
    ) -> Result<Self, MexbtError> {
        let read = |var: &str| {
            std::env::var(var)
                .map_err(|_| MexbtError::Config(format!("Environment variable {var} not set")))
        };

        Ok(Self {
            credentials: Credentials::new(read(key_var)?, read(private_key_var)?, read(user_id_var)?),
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if any of the variables is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
