//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::MexbtError;
use crate::rest::MexbtRestClient;
use crate::rest::endpoints::public;

impl MexbtRestClient {
    /// Get the ticker for a product pair.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mexbt_api_client::rest::MexbtRestClient;
    /// use mexbt_api_client::types::BTCMXN;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = MexbtRestClient::new();
    ///     let ticker = client.get_ticker(BTCMXN).await?;
    ///     println!("Bid {} / Ask {}", ticker.bid, ticker.ask);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_ticker(&self, product_pair: &str) -> Result<Ticker, MexbtError> {
        let request = TickerRequest {
            product_pair: product_pair.to_string(),
        };
        self.call(public::TICKER, &request).await
    }

    /// Get the list of tradable product pairs.
    pub async fn get_product_pairs(&self) -> Result<ProductPairs, MexbtError> {
        self.call(public::PRODUCT_PAIRS, &ProductPairsRequest {})
            .await
    }

    /// Get trades for an instrument within a date range.
    ///
    /// # Arguments
    ///
    /// * `ins` - Instrument (e.g., "BTCMXN").
    /// * `start_date` - Range start in unix seconds.
    /// * `end_date` - Range end in unix seconds.
    pub async fn get_trades_by_date(
        &self,
        ins: &str,
        start_date: i64,
        end_date: i64,
    ) -> Result<TradesByDate, MexbtError> {
        let request = TradesByDateRequest {
            ins: ins.to_string(),
            start_date,
            end_date,
        };
        self.call(public::TRADES_BY_DATE, &request).await
    }

    /// Get trades for an instrument by start index and count.
    ///
    /// Pass `-1` as `start_index` for the most recent trades.
    pub async fn get_trades(
        &self,
        ins: &str,
        start_index: i64,
        count: u32,
    ) -> Result<Trades, MexbtError> {
        let request = TradesRequest {
            ins: ins.to_string(),
            start_index,
            count,
        };
        self.call(public::TRADES, &request).await
    }

    /// Get the order book for a product pair.
    pub async fn get_order_book(&self, product_pair: &str) -> Result<OrderBook, MexbtError> {
        let request = OrderBookRequest {
            product_pair: product_pair.to_string(),
        };
        self.call(public::ORDER_BOOK, &request).await
    }
}
