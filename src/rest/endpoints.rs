//! meXBT REST API method names and endpoint resolution.
//!
//! Methods are named `<scope>/<path>`, where scope is `public` or `private`.
//! Each scope lives on its own host:
//!
//! ```text
//! production: https://<scope>-api.mexbt.com/v1/<path>
//! sandbox:    https://private-api-sandbox.mexbt.com/v1/<path>
//! ```
//!
//! Sandbox routing only applies to the `private` scope. Public market data
//! is the same in both environments, so public methods always resolve to the
//! production public host.

use url::Url;

use crate::error::MexbtError;

/// Domain of the meXBT API hosts.
pub const MEXBT_DOMAIN: &str = "mexbt.com";

/// API version path segment.
pub const API_VERSION: &str = "v1";

/// Public methods (no authentication required).
pub mod public {
    /// Get ticker for a product pair.
    pub const TICKER: &str = "public/ticker";
    /// List tradable product pairs.
    pub const PRODUCT_PAIRS: &str = "public/product-pairs";
    /// Get trades in a date range.
    pub const TRADES_BY_DATE: &str = "public/trades-by-date";
    /// Get trades by start index and count.
    pub const TRADES: &str = "public/trades";
    /// Get order book snapshot.
    pub const ORDER_BOOK: &str = "public/order-book";
}

/// Private methods (authentication required).
pub mod private {
    // Trading
    /// Create order.
    pub const CREATE_ORDER: &str = "private/orders/create";
    /// Modify order.
    pub const MODIFY_ORDER: &str = "private/orders/modify";
    /// Cancel order.
    pub const CANCEL_ORDER: &str = "private/orders/cancel";
    /// Cancel all orders for an instrument.
    pub const CANCEL_ALL: &str = "private/orders/cancel-all";
    /// Get open orders.
    pub const OPEN_ORDERS: &str = "private/orders";

    // Account
    /// Get balances.
    pub const BALANCE: &str = "private/balance";
    /// Get account profile.
    pub const ME: &str = "private/me";
    /// Get account trades.
    pub const TRADES: &str = "private/trades";

    // Funding
    /// Get deposit addresses.
    pub const DEPOSIT_ADDRESSES: &str = "private/deposit-addresses";
    /// Withdraw funds.
    pub const WITHDRAW: &str = "private/withdraw";
}

/// Method scope, the part of a method name before the first `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Unauthenticated market data
    Public,
    /// Authenticated trading and account operations
    Private,
}

impl Scope {
    /// Scope name as it appears in method names and host names.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Public => "public",
            Scope::Private => "private",
        }
    }
}

/// Split a method name into its scope and path.
pub fn split_method(method: &str) -> Result<(Scope, &str), MexbtError> {
    let (scope, path) = method
        .split_once('/')
        .ok_or_else(|| MexbtError::InvalidEndpoint(method.to_string()))?;

    let scope = match scope {
        "public" => Scope::Public,
        "private" => Scope::Private,
        _ => return Err(MexbtError::InvalidEndpoint(method.to_string())),
    };

    if path.is_empty() {
        return Err(MexbtError::InvalidEndpoint(method.to_string()));
    }

    Ok((scope, path))
}

/// Which meXBT deployment a client talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Live exchange.
    #[default]
    Production,
    /// Sandbox for the private scope; public data still comes from production.
    Sandbox,
    /// Any other base URL (a mock server or proxy). Methods resolve to
    /// `<base>/<scope>/v1/<path>`.
    Custom(String),
}

impl Environment {
    /// Whether private calls go to the sandbox.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }

    /// Resolve a `<scope>/<path>` method name to a full URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mexbt_api_client::rest::Environment;
    ///
    /// let url = Environment::Sandbox.resolve("private/orders/create").unwrap();
    /// assert_eq!(url.as_str(), "https://private-api-sandbox.mexbt.com/v1/orders/create");
    /// ```
    pub fn resolve(&self, method: &str) -> Result<Url, MexbtError> {
        let (scope, path) = split_method(method)?;
        let url = match (self, scope) {
            (Environment::Custom(base), _) => format!(
                "{}/{}/{}/{}",
                base.trim_end_matches('/'),
                scope.as_str(),
                API_VERSION,
                path
            ),
            (Environment::Sandbox, Scope::Private) => format!(
                "https://{}-api-sandbox.{}/{}/{}",
                scope.as_str(),
                MEXBT_DOMAIN,
                API_VERSION,
                path
            ),
            _ => format!(
                "https://{}-api.{}/{}/{}",
                scope.as_str(),
                MEXBT_DOMAIN,
                API_VERSION,
                path
            ),
        };
        Ok(Url::parse(&url)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_hosts() {
        let env = Environment::Production;
        assert_eq!(
            env.resolve(public::TICKER).unwrap().as_str(),
            "https://public-api.mexbt.com/v1/ticker"
        );
        assert_eq!(
            env.resolve(private::CREATE_ORDER).unwrap().as_str(),
            "https://private-api.mexbt.com/v1/orders/create"
        );
    }

    #[test]
    fn test_sandbox_keeps_public_on_production() {
        let env = Environment::Sandbox;
        assert_eq!(
            env.resolve(public::TICKER).unwrap().as_str(),
            "https://public-api.mexbt.com/v1/ticker"
        );
        assert_eq!(
            env.resolve(private::CREATE_ORDER).unwrap().as_str(),
            "https://private-api-sandbox.mexbt.com/v1/orders/create"
        );
    }

    #[test]
    fn test_custom_base() {
        let env = Environment::Custom("http://127.0.0.1:8080/".to_string());
        assert_eq!(
            env.resolve(private::CANCEL_ALL).unwrap().as_str(),
            "http://127.0.0.1:8080/private/v1/orders/cancel-all"
        );
        assert_eq!(
            env.resolve(public::ORDER_BOOK).unwrap().as_str(),
            "http://127.0.0.1:8080/public/v1/order-book"
        );
    }

    #[test]
    fn test_invalid_methods() {
        for method in ["ticker", "admin/ticker", "public/", ""] {
            assert!(matches!(
                Environment::Production.resolve(method),
                Err(MexbtError::InvalidEndpoint(_))
            ));
        }
    }

    #[test]
    fn test_invalid_custom_base() {
        let env = Environment::Custom("not a url".to_string());
        assert!(matches!(
            env.resolve(public::TICKER),
            Err(MexbtError::Url(_))
        ));
    }
}
