//! meXBT REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, IncreasingNonce, NonceProvider, SignedEnvelope};
use crate::error::MexbtError;
use crate::rest::endpoints::Environment;

const DEFAULT_USER_AGENT: &str = concat!("mexbt-api-client/", env!("CARGO_PKG_VERSION"));

/// The meXBT REST API client.
///
/// Every operation is a single JSON POST. Public operations need no
/// credentials; private operations sign each request with the configured
/// credentials and a fresh nonce.
///
/// # Example
///
/// ```rust,no_run
/// use mexbt_api_client::rest::MexbtRestClient;
/// use mexbt_api_client::types::BTCUSD;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MexbtRestClient::new();
///     let ticker = client.get_ticker(BTCUSD).await?;
///     println!("Last: {}", ticker.last);
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use mexbt_api_client::auth::StaticCredentials;
/// use mexbt_api_client::rest::{Environment, MexbtRestClient};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "private_key", "user_id"));
///     let client = MexbtRestClient::builder()
///         .environment(Environment::Sandbox)
///         .credentials(credentials)
///         .build()?;
///
///     let balance = client.get_balance().await?;
///     println!("Balance: {:?}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct MexbtRestClient {
    http_client: ClientWithMiddleware,
    environment: Environment,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl MexbtRestClient {
    /// Create a production client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`MexbtRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build_default()
    }

    /// Create a new client builder.
    pub fn builder() -> MexbtRestClientBuilder {
        MexbtRestClientBuilder::new()
    }

    /// The environment this client talks to.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Build a signed envelope for a private call.
    ///
    /// `instrument` is empty for account-scoped operations.
    pub(crate) fn signed(&self, instrument: &str) -> Result<SignedEnvelope, MexbtError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(MexbtError::MissingCredentials)?;

        let nonce = self.nonce_provider.next_nonce();
        SignedEnvelope::new(credentials.get_credentials(), nonce, instrument)
    }

    /// POST a request to a method and decode the typed response.
    ///
    /// The body is fully buffered before decoding. The response's
    /// `IsAccepted` flag is left for the caller to interpret.
    pub(crate) async fn call<T, R>(&self, method: &str, request: &R) -> Result<T, MexbtError>
    where
        T: serde::de::DeserializeOwned,
        R: serde::Serialize + ?Sized,
    {
        let url = self.environment.resolve(method)?;
        let body = serde_json::to_vec(request).map_err(MexbtError::Serialization)?;

        tracing::debug!(method, %url, "Sending meXBT request");

        let response = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        self.parse_response(method, response).await
    }

    /// Parse a response from the meXBT API.
    async fn parse_response<T>(
        &self,
        method: &str,
        response: reqwest::Response,
    ) -> Result<T, MexbtError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(method, %status, "Failed to parse meXBT response: {}", source);
            MexbtError::Deserialization { source, body }
        })
    }
}

impl Default for MexbtRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MexbtRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MexbtRestClient")
            .field("environment", &self.environment)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`MexbtRestClient`].
pub struct MexbtRestClientBuilder {
    environment: Environment,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl MexbtRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            environment: Environment::Production,
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Select production, sandbox, or a custom base URL.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Shortcut for `environment(Environment::Sandbox)`.
    pub fn sandbox(self) -> Self {
        self.environment(Environment::Sandbox)
    }

    /// Route every method to `<url>/<scope>/v1/<path>` (useful for testing with a mock server).
    pub fn base_url(self, url: impl Into<String>) -> Self {
        self.environment(Environment::Custom(url.into()))
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total request timeout. Without one, the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MexbtRestClient, MexbtError> {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let header_value = HeaderValue::from_str(&user_agent)
            .map_err(|e| MexbtError::Config(format!("Invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder.build()?;

        Ok(MexbtRestClient {
            http_client: ClientBuilder::new(reqwest_client)
                .with(TracingMiddleware::default())
                .build(),
            environment: self.environment,
            credentials: self.credentials,
            nonce_provider: self
                .nonce_provider
                .unwrap_or_else(|| Arc::new(IncreasingNonce::new())),
        })
    }

    /// Build with the default user agent, falling back to a plain reqwest client.
    fn build_default(self) -> MexbtRestClient {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        MexbtRestClient {
            http_client,
            environment: self.environment,
            credentials: self.credentials,
            nonce_provider: self
                .nonce_provider
                .unwrap_or_else(|| Arc::new(IncreasingNonce::new())),
        }
    }
}

impl Default for MexbtRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;

    struct FixedNonce(u64);

    impl NonceProvider for FixedNonce {
        fn next_nonce(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_signed_requires_credentials() {
        let client = MexbtRestClient::new();
        assert!(matches!(
            client.signed(""),
            Err(MexbtError::MissingCredentials)
        ));
    }

    #[test]
    fn test_signed_uses_nonce_provider() {
        let client = MexbtRestClient::builder()
            .credentials(Arc::new(StaticCredentials::new(
                "test_api_key",
                "test_private_key",
                "trader@example.com",
            )))
            .nonce_provider(Arc::new(FixedNonce(1416559390000)))
            .build()
            .unwrap();

        let envelope = client.signed("BTCMXN").unwrap();
        assert_eq!(envelope.api_nonce, 1416559390000);
        assert_eq!(envelope.ins, "BTCMXN");
        assert_eq!(
            envelope.api_sig,
            "94809B7B06F886263F775FC786E717AF976EDC295DF34CB07D01C77F8F9F53F8"
        );
    }

    #[test]
    fn test_invalid_user_agent_is_config_error() {
        let result = MexbtRestClient::builder().user_agent("bad\nagent").build();
        assert!(matches!(result, Err(MexbtError::Config(_))));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = MexbtRestClient::builder()
            .sandbox()
            .credentials(Arc::new(StaticCredentials::new("k", "hidden_secret", "u")))
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("Sandbox"));
        assert!(!debug.contains("hidden_secret"));
    }
}
