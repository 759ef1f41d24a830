//! Trait definition for the meXBT REST API client.
//!
//! This module provides the `MexbtClient` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorator patterns around the real client
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use mexbt_api_client::rest::{MexbtClient, MexbtRestClient};
//!
//! async fn print_last<C: MexbtClient>(client: &C) -> Result<(), mexbt_api_client::MexbtError> {
//!     let ticker = client.get_ticker("BTCUSD").await?;
//!     println!("Last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::MexbtError;
use crate::rest::MexbtRestClient;
use crate::rest::private::{
    Balance, CancelOrderResponse, CreateOrderRequest, CreateOrderResponse, DepositAddresses,
    ModifyOrderResponse, OpenOrders, UserInfo,
};
use crate::rest::public::{OrderBook, ProductPairs, Ticker, Trades, TradesByDate};
use crate::types::{ApiStatus, ModifyAction};

/// Trait defining all meXBT REST API operations.
///
/// All methods are async and return `Result<T, MexbtError>`.
pub trait MexbtClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the ticker for a product pair.
    fn get_ticker(
        &self,
        product_pair: &str,
    ) -> impl Future<Output = Result<Ticker, MexbtError>> + Send;

    /// Get the list of tradable product pairs.
    fn get_product_pairs(&self)
    -> impl Future<Output = Result<ProductPairs, MexbtError>> + Send;

    /// Get trades within a date range.
    fn get_trades_by_date(
        &self,
        ins: &str,
        start_date: i64,
        end_date: i64,
    ) -> impl Future<Output = Result<TradesByDate, MexbtError>> + Send;

    /// Get trades by start index and count.
    fn get_trades(
        &self,
        ins: &str,
        start_index: i64,
        count: u32,
    ) -> impl Future<Output = Result<Trades, MexbtError>> + Send;

    /// Get the order book for a product pair.
    fn get_order_book(
        &self,
        product_pair: &str,
    ) -> impl Future<Output = Result<OrderBook, MexbtError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Create an order.
    fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> impl Future<Output = Result<CreateOrderResponse, MexbtError>> + Send;

    /// Modify a resting order.
    fn modify_order(
        &self,
        ins: &str,
        server_order_id: i64,
        action: ModifyAction,
    ) -> impl Future<Output = Result<ModifyOrderResponse, MexbtError>> + Send;

    /// Cancel one order.
    fn cancel_order(
        &self,
        ins: &str,
        server_order_id: i64,
    ) -> impl Future<Output = Result<CancelOrderResponse, MexbtError>> + Send;

    /// Cancel all orders for an instrument.
    fn cancel_all_orders(
        &self,
        ins: &str,
    ) -> impl Future<Output = Result<ApiStatus, MexbtError>> + Send;

    /// Get open orders.
    fn get_open_orders(&self) -> impl Future<Output = Result<OpenOrders, MexbtError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get account balances.
    fn get_balance(&self) -> impl Future<Output = Result<Balance, MexbtError>> + Send;

    /// Get the account profile.
    fn get_user_info(&self) -> impl Future<Output = Result<UserInfo, MexbtError>> + Send;

    /// Get the account trade history.
    fn get_account_trades(
        &self,
        ins: &str,
        start_index: i64,
        count: u32,
    ) -> impl Future<Output = Result<Trades, MexbtError>> + Send;

    // ========== Private Endpoints - Funding ==========

    /// Get deposit addresses.
    fn get_deposit_addresses(
        &self,
    ) -> impl Future<Output = Result<DepositAddresses, MexbtError>> + Send;

    /// Withdraw funds.
    fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> impl Future<Output = Result<ApiStatus, MexbtError>> + Send;
}

impl MexbtClient for MexbtRestClient {
    async fn get_ticker(&self, product_pair: &str) -> Result<Ticker, MexbtError> {
        MexbtRestClient::get_ticker(self, product_pair).await
    }

    async fn get_product_pairs(&self) -> Result<ProductPairs, MexbtError> {
        MexbtRestClient::get_product_pairs(self).await
    }

    async fn get_trades_by_date(
        &self,
        ins: &str,
        start_date: i64,
        end_date: i64,
    ) -> Result<TradesByDate, MexbtError> {
        MexbtRestClient::get_trades_by_date(self, ins, start_date, end_date).await
    }

    async fn get_trades(
        &self,
        ins: &str,
        start_index: i64,
        count: u32,
    ) -> Result<Trades, MexbtError> {
        MexbtRestClient::get_trades(self, ins, start_index, count).await
    }

    async fn get_order_book(&self, product_pair: &str) -> Result<OrderBook, MexbtError> {
        MexbtRestClient::get_order_book(self, product_pair).await
    }

    async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, MexbtError> {
        MexbtRestClient::create_order(self, request).await
    }

    async fn modify_order(
        &self,
        ins: &str,
        server_order_id: i64,
        action: ModifyAction,
    ) -> Result<ModifyOrderResponse, MexbtError> {
        MexbtRestClient::modify_order(self, ins, server_order_id, action).await
    }

    async fn cancel_order(
        &self,
        ins: &str,
        server_order_id: i64,
    ) -> Result<CancelOrderResponse, MexbtError> {
        MexbtRestClient::cancel_order(self, ins, server_order_id).await
    }

    async fn cancel_all_orders(&self, ins: &str) -> Result<ApiStatus, MexbtError> {
        MexbtRestClient::cancel_all_orders(self, ins).await
    }

    async fn get_open_orders(&self) -> Result<OpenOrders, MexbtError> {
        MexbtRestClient::get_open_orders(self).await
    }

    async fn get_balance(&self) -> Result<Balance, MexbtError> {
        MexbtRestClient::get_balance(self).await
    }

    async fn get_user_info(&self) -> Result<UserInfo, MexbtError> {
        MexbtRestClient::get_user_info(self).await
    }

    async fn get_account_trades(
        &self,
        ins: &str,
        start_index: i64,
        count: u32,
    ) -> Result<Trades, MexbtError> {
        MexbtRestClient::get_account_trades(self, ins, start_index, count).await
    }

    async fn get_deposit_addresses(&self) -> Result<DepositAddresses, MexbtError> {
        MexbtRestClient::get_deposit_addresses(self).await
    }

    async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<ApiStatus, MexbtError> {
        MexbtRestClient::withdraw(self, currency, amount, address).await
    }
}
