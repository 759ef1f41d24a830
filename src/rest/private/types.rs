//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::SignedEnvelope;
use crate::types::serde_helpers::{flexible_f64, null_as_default};
use crate::types::{ApiStatus, ModifyAction, OrderType, Side, impl_accepted};

/// A private request body: the signed envelope next to the operation's parameters.
///
/// Both parts are flattened into one JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct SignedRequest<P> {
    /// Authentication fields.
    #[serde(flatten)]
    pub auth: SignedEnvelope,
    /// Operation parameters.
    #[serde(flatten)]
    pub params: P,
}

/// Parameters for operations that carry only the envelope.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}

// ========== Trading ==========

/// Request parameters for creating an order.
///
/// Quantity and price are sent as decimal strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Product pair; travels as the envelope's `ins`.
    #[serde(skip)]
    pub product_pair: String,
    /// Buy or sell.
    pub side: Side,
    /// Limit or market.
    pub order_type: OrderType,
    /// Order quantity.
    #[serde(with = "rust_decimal::serde::str")]
    pub qty: Decimal,
    /// Limit price (zero for market orders).
    #[serde(with = "rust_decimal::serde::str")]
    pub px: Decimal,
}

impl CreateOrderRequest {
    /// Create a limit order request.
    pub fn limit(product_pair: impl Into<String>, side: Side, qty: Decimal, px: Decimal) -> Self {
        Self {
            product_pair: product_pair.into(),
            side,
            order_type: OrderType::Limit,
            qty,
            px,
        }
    }

    /// Create a market order request.
    pub fn market(product_pair: impl Into<String>, side: Side, qty: Decimal) -> Self {
        Self {
            product_pair: product_pair.into(),
            side,
            order_type: OrderType::Market,
            qty,
            px: Decimal::ZERO,
        }
    }
}

/// Response to order creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateOrderResponse {
    /// Server-assigned order id.
    pub server_order_id: i64,
    /// Server time (UTC ticks).
    pub date_time_utc: i64,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

/// Request parameters for modifying a resting order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyOrderRequest {
    /// Instrument; travels as the envelope's `ins`.
    #[serde(skip)]
    pub ins: String,
    /// Server order id.
    pub server_order_id: i64,
    /// What to do with the order.
    pub modify_action: ModifyAction,
}

/// Response to order modification or cancellation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModifyOrderResponse {
    /// Server order id (may differ from the original after a modification).
    pub server_order_id: i64,
    /// Server time (UTC ticks).
    pub date_time_utc: i64,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

/// Response to order cancellation.
pub type CancelOrderResponse = ModifyOrderResponse;

/// Request parameters for cancelling one order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Instrument; travels as the envelope's `ins`.
    #[serde(skip)]
    pub ins: String,
    /// Server order id.
    pub server_order_id: i64,
}

/// Open orders across all instruments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OpenOrders {
    /// Server time (UTC ticks).
    pub date_time_utc: i64,
    /// Open orders grouped by instrument.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub open_orders_info: Vec<InstrumentOrders>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

impl OpenOrders {
    /// Open orders for one instrument.
    pub fn for_instrument(&self, ins: &str) -> &[OpenOrder] {
        self.open_orders_info
            .iter()
            .find(|group| group.ins == ins)
            .map(|group| group.open_orders.as_slice())
            .unwrap_or_default()
    }

    /// Total number of open orders.
    pub fn len(&self) -> usize {
        self.open_orders_info
            .iter()
            .map(|group| group.open_orders.len())
            .sum()
    }

    /// Whether there are no open orders.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Open orders for one instrument.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstrumentOrders {
    /// Instrument.
    pub ins: String,
    /// Orders.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub open_orders: Vec<OpenOrder>,
}

/// A resting order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OpenOrder {
    /// Server order id.
    pub server_order_id: i64,
    /// Owning account id.
    pub account_id: i64,
    /// Limit price.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub price: f64,
    /// Original quantity.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub qty_total: f64,
    /// Quantity still open.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub qty_remaining: f64,
    /// Time the order was received (UTC ticks).
    #[serde(alias = "RecieveTime")]
    pub receive_time: i64,
    /// Side code: 0 buy, 1 sell.
    pub side: i64,
}

impl OpenOrder {
    /// Order side, if the code is known.
    pub fn side(&self) -> Option<Side> {
        Side::from_code(self.side)
    }

    /// Quantity already filled.
    pub fn qty_filled(&self) -> f64 {
        self.qty_total - self.qty_remaining
    }
}

// ========== Account ==========

/// Request parameters for the account trade history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTradesRequest {
    /// Instrument; travels as the envelope's `ins`.
    #[serde(skip)]
    pub ins: String,
    /// Index of the first trade (`-1` for the most recent).
    pub start_index: i64,
    /// Number of trades.
    pub count: u32,
}

/// Account balances.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Balance {
    /// One entry per currency.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub currencies: Vec<BalanceEntry>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

impl Balance {
    /// Balance entry for a currency (e.g., "BTC").
    pub fn get(&self, currency: &str) -> Option<&BalanceEntry> {
        self.currencies.iter().find(|entry| entry.name == currency)
    }
}

/// Balance of one currency.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BalanceEntry {
    /// Currency name.
    pub name: String,
    /// Total balance.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub balance: f64,
    /// Amount on hold in open orders or withdrawals.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub hold: f64,
    /// Number of trades in this currency.
    pub trade_count: i64,
}

impl BalanceEntry {
    /// Balance not on hold.
    pub fn available(&self) -> f64 {
        self.balance - self.hold
    }
}

/// Account profile as key/value pairs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    /// Profile entries.
    #[serde(
        rename = "UserInfoKVP",
        deserialize_with = "null_as_default::deserialize"
    )]
    pub entries: Vec<KeyValuePair>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

impl UserInfo {
    /// Value for a profile key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| kv.value.as_str())
    }
}

/// A profile entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyValuePair {
    /// Key.
    pub key: String,
    /// Value.
    pub value: String,
}

// ========== Funding ==========

/// Deposit addresses per currency.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DepositAddresses {
    /// Addresses.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub addresses: Vec<DepositAddress>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

impl DepositAddresses {
    /// Deposit address for a currency (e.g., "BTC").
    pub fn get(&self, currency: &str) -> Option<&str> {
        self.addresses
            .iter()
            .find(|address| address.name == currency)
            .map(|address| address.deposit_address.as_str())
    }
}

/// Deposit address of one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DepositAddress {
    /// Currency name.
    pub name: String,
    /// Address to deposit to.
    pub deposit_address: String,
}

/// Request parameters for a withdrawal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    /// Currency to withdraw; travels as the envelope's `ins`.
    #[serde(skip)]
    pub currency: String,
    /// Amount, sent as a decimal string.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Destination address.
    pub send_to_address: String,
}

impl_accepted!(
    CreateOrderResponse,
    ModifyOrderResponse,
    OpenOrders,
    Balance,
    UserInfo,
    DepositAddresses,
);
