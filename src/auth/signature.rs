//! HMAC-SHA256 signature generation for meXBT API authentication.
//!
//! meXBT private endpoints require a signature computed as:
//! ```text
//! HEX_UPPER(HMAC-SHA256(nonce + user_id + api_key, private_key))
//! ```
//!
//! The signature travels in the JSON body as `apiSig`, next to `apiKey`,
//! `apiNonce` and the instrument `ins`.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::MexbtError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for meXBT's private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the private key
/// * `nonce` - The nonce value for this request
///
/// # Returns
///
/// Uppercase hex-encoded HMAC-SHA256 signature (64 characters).
///
/// # Example
///
/// ```rust
/// use mexbt_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "private_key", "trader@example.com");
/// let signature = sign_request(&credentials, 1416559390000)?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(credentials: &Credentials, nonce: u64) -> Result<String, MexbtError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| MexbtError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(nonce.to_string().as_bytes());
    hmac.update(credentials.user_id.as_bytes());
    hmac.update(credentials.api_key.as_bytes());

    Ok(hex::encode_upper(hmac.finalize().into_bytes()))
}

/// Authentication fields carried by every private request body.
///
/// Request types hold this as a flattened field, so the four values sit at
/// the top level of the JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedEnvelope {
    /// Public API key.
    #[serde(rename = "apiKey")]
    pub api_key: String,
    /// Strictly increasing nonce (milliseconds since epoch).
    #[serde(rename = "apiNonce")]
    pub api_nonce: u64,
    /// Uppercase hex signature.
    #[serde(rename = "apiSig")]
    pub api_sig: String,
    /// Instrument, or an empty string for account-scoped operations.
    pub ins: String,
}

impl SignedEnvelope {
    /// Build a signed envelope for the given nonce and instrument.
    pub fn new(
        credentials: &Credentials,
        nonce: u64,
        instrument: impl Into<String>,
    ) -> Result<Self, MexbtError> {
        Ok(Self {
            api_key: credentials.api_key.clone(),
            api_nonce: nonce,
            api_sig: sign_request(credentials, nonce)?,
            ins: instrument.into(),
        })
    }
}
