//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Every call is signed with a fresh nonce.

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::MexbtError;
use crate::rest::MexbtRestClient;
use crate::rest::endpoints::private;
use crate::types::{ApiStatus, ModifyAction, Side};

impl MexbtRestClient {
    /// Sign `params` for `instrument` and call a private method.
    async fn private_call<T, P>(
        &self,
        method: &str,
        instrument: &str,
        params: P,
    ) -> Result<T, MexbtError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        let request = SignedRequest {
            auth: self.signed(instrument)?,
            params,
        };
        self.call(method, &request).await
    }

    // ========== Trading ==========

    /// Create an order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mexbt_api_client::auth::StaticCredentials;
    /// use mexbt_api_client::rest::MexbtRestClient;
    /// use mexbt_api_client::rest::private::CreateOrderRequest;
    /// use mexbt_api_client::types::{Accepted, Side, BTCMXN};
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "private_key", "user_id"));
    ///     let client = MexbtRestClient::builder().credentials(credentials).build()?;
    ///
    ///     let request = CreateOrderRequest::limit(
    ///         BTCMXN,
    ///         Side::Buy,
    ///         Decimal::new(1242, 2),
    ///         Decimal::new(202, 2),
    ///     );
    ///     let order = client.create_order(&request).await?.accepted()?;
    ///     println!("Order id: {}", order.server_order_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, MexbtError> {
        self.private_call(private::CREATE_ORDER, &request.product_pair, request)
            .await
    }

    /// Create a market order.
    pub async fn create_market_order(
        &self,
        product_pair: &str,
        side: Side,
        qty: Decimal,
    ) -> Result<CreateOrderResponse, MexbtError> {
        self.create_order(&CreateOrderRequest::market(product_pair, side, qty))
            .await
    }

    /// Create a limit order.
    pub async fn create_limit_order(
        &self,
        product_pair: &str,
        side: Side,
        qty: Decimal,
        px: Decimal,
    ) -> Result<CreateOrderResponse, MexbtError> {
        self.create_order(&CreateOrderRequest::limit(product_pair, side, qty, px))
            .await
    }

    /// Modify a resting order.
    pub async fn modify_order(
        &self,
        ins: &str,
        server_order_id: i64,
        action: ModifyAction,
    ) -> Result<ModifyOrderResponse, MexbtError> {
        let request = ModifyOrderRequest {
            ins: ins.to_string(),
            server_order_id,
            modify_action: action,
        };
        self.private_call(private::MODIFY_ORDER, ins, &request)
            .await
    }

    /// Move a resting order to the top of the book.
    pub async fn move_to_top(
        &self,
        ins: &str,
        server_order_id: i64,
    ) -> Result<ModifyOrderResponse, MexbtError> {
        self.modify_order(ins, server_order_id, ModifyAction::MoveToTop)
            .await
    }

    /// Execute a resting order immediately.
    pub async fn execute_now(
        &self,
        ins: &str,
        server_order_id: i64,
    ) -> Result<ModifyOrderResponse, MexbtError> {
        self.modify_order(ins, server_order_id, ModifyAction::ExecuteNow)
            .await
    }

    /// Cancel one order.
    pub async fn cancel_order(
        &self,
        ins: &str,
        server_order_id: i64,
    ) -> Result<CancelOrderResponse, MexbtError> {
        let request = CancelOrderRequest {
            ins: ins.to_string(),
            server_order_id,
        };
        self.private_call(private::CANCEL_ORDER, ins, &request)
            .await
    }

    /// Cancel all orders for an instrument.
    pub async fn cancel_all_orders(&self, ins: &str) -> Result<ApiStatus, MexbtError> {
        self.private_call(private::CANCEL_ALL, ins, NoParams {})
            .await
    }

    /// Get open orders across all instruments.
    pub async fn get_open_orders(&self) -> Result<OpenOrders, MexbtError> {
        self.private_call(private::OPEN_ORDERS, "", NoParams {})
            .await
    }

    // ========== Account ==========

    /// Get account balances.
    pub async fn get_balance(&self) -> Result<Balance, MexbtError> {
        self.private_call(private::BALANCE, "", NoParams {}).await
    }

    /// Get the account profile.
    pub async fn get_user_info(&self) -> Result<UserInfo, MexbtError> {
        self.private_call(private::ME, "", NoParams {}).await
    }

    /// Get the account's trade history for an instrument.
    ///
    /// Pass `-1` as `start_index` for the most recent trades.
    pub async fn get_account_trades(
        &self,
        ins: &str,
        start_index: i64,
        count: u32,
    ) -> Result<crate::rest::public::Trades, MexbtError> {
        let request = AccountTradesRequest {
            ins: ins.to_string(),
            start_index,
            count,
        };
        self.private_call(private::TRADES, ins, &request).await
    }

    // ========== Funding ==========

    /// Get deposit addresses for every currency.
    pub async fn get_deposit_addresses(&self) -> Result<DepositAddresses, MexbtError> {
        self.private_call(private::DEPOSIT_ADDRESSES, "", NoParams {})
            .await
    }

    /// Withdraw funds to an external address.
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<ApiStatus, MexbtError> {
        let request = WithdrawRequest {
            currency: currency.to_string(),
            amount,
            send_to_address: address.to_string(),
        };
        self.private_call(private::WITHDRAW, currency, &request)
            .await
    }
}
