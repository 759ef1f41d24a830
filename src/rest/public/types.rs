//! Types for public REST API endpoints.

use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{flexible_f64, null_as_default};
use crate::types::{ApiStatus, Side, impl_accepted};

/// Request parameters for the ticker.
#[derive(Debug, Clone, Serialize)]
pub struct TickerRequest {
    /// Product pair (e.g., "BTCUSD").
    #[serde(rename = "productPair")]
    pub product_pair: String,
}

/// Ticker information for one product pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Ticker {
    /// 24h high.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub high: f64,
    /// Last trade price.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub last: f64,
    /// Best bid.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub bid: f64,
    /// Volume.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub volume: f64,
    /// 24h volume in the first product.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub volume24h: f64,
    /// 24h volume in the second product.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub volume24hr_product2: f64,
    /// 24h low.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub low: f64,
    /// Best ask.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub ask: f64,
    /// 24h quantity traded.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub total24_hr_qty_traded: f64,
    /// 24h amount of the second product traded.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub total24_hr_product2_traded: f64,
    /// Number of trades in the last 24h.
    pub total24_hr_num_trades: u64,
    /// Number of resting sell orders.
    pub sell_order_count: u64,
    /// Number of resting buy orders.
    pub buy_order_count: u64,
    /// Number of orders created.
    pub num_of_create_orders: u64,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

impl Ticker {
    /// Difference between best ask and best bid.
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}

/// Request parameters for tradable product pairs (no fields).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductPairsRequest {}

/// Tradable product pairs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProductPairs {
    /// Product pairs.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub product_pairs: Vec<ProductPair>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

impl ProductPairs {
    /// Find a pair by name (e.g., "BTCMXN").
    pub fn get(&self, name: &str) -> Option<&ProductPair> {
        self.product_pairs.iter().find(|pair| pair.name == name)
    }
}

/// A tradable product pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProductPair {
    /// Pair name (e.g., "BTCUSD").
    pub name: String,
    /// Numeric pair code.
    pub product_pair_code: i64,
    /// First product label (e.g., "BTC").
    pub product1_label: String,
    /// Decimal places of the first product.
    pub product1_decimal_places: u32,
    /// Second product label (e.g., "USD").
    pub product2_label: String,
    /// Decimal places of the second product.
    pub product2_decimal_places: u32,
}

/// Request parameters for trades within a date range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesByDateRequest {
    /// Instrument.
    pub ins: String,
    /// Range start (unix seconds).
    pub start_date: i64,
    /// Range end (unix seconds).
    pub end_date: i64,
}

/// Trades within a date range.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TradesByDate {
    /// Server time (UTC ticks).
    pub date_time_utc: i64,
    /// Instrument.
    pub ins: String,
    /// Range start echoed back.
    pub start_date: i64,
    /// Range end echoed back.
    pub end_date: i64,
    /// Trades.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub trades: Vec<Trade>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

/// Request parameters for trades by index.
///
/// A `start_index` of `-1` asks for the most recent trades.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesRequest {
    /// Instrument.
    pub ins: String,
    /// Index of the first trade.
    pub start_index: i64,
    /// Number of trades.
    pub count: u32,
}

/// Trades by index, returned by both the public and the account trade history.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Trades {
    /// Server time (UTC ticks).
    pub date_time_utc: i64,
    /// Instrument.
    pub ins: String,
    /// Start index echoed back.
    pub start_index: i64,
    /// Count echoed back.
    pub count: i64,
    /// Trades.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub trades: Vec<Trade>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

/// A single executed trade.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Trade {
    /// Trade id.
    #[serde(alias = "TID")]
    pub tid: i64,
    /// Price.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub px: f64,
    /// Quantity.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub qty: f64,
    /// Unix time (seconds).
    pub unixtime: i64,
    /// UTC ticks.
    #[serde(alias = "UTCTicks")]
    pub utc_ticks: i64,
    /// Side of the incoming (taker) order: 0 buy, 1 sell.
    pub incoming_order_side: i64,
    /// Server id of the incoming order.
    pub incoming_server_order_id: i64,
    /// Server id of the resting order.
    pub book_server_order_id: i64,
}

impl Trade {
    /// Side of the taker order, if the code is known.
    pub fn taker_side(&self) -> Option<Side> {
        Side::from_code(self.incoming_order_side)
    }
}

/// Request parameters for the order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    /// Product pair.
    #[serde(rename = "productPair")]
    pub product_pair: String,
}

/// Order book snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OrderBook {
    /// Bid levels.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub bids: Vec<BookLevel>,
    /// Ask levels.
    #[serde(deserialize_with = "null_as_default::deserialize")]
    pub asks: Vec<BookLevel>,
    /// Acceptance status.
    #[serde(flatten)]
    pub status: ApiStatus,
}

impl OrderBook {
    /// Best (first) bid level.
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    /// Best (first) ask level.
    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }
}

/// A price level in the order book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BookLevel {
    /// Quantity.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub qty: f64,
    /// Price.
    #[serde(deserialize_with = "flexible_f64::deserialize")]
    pub px: f64,
}

impl_accepted!(Ticker, ProductPairs, TradesByDate, Trades, OrderBook);
