//! # meXBT Client
//!
//! An async Rust client library for the meXBT exchange REST API.
//!
//! ## Features
//!
//! - Public market data: ticker, product pairs, trades, order book
//! - Authenticated trading, account and funding operations
//! - HMAC-SHA256 request signing with strictly increasing nonces
//! - Production and sandbox environments chosen per client
//! - Strong typing for all request/response types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mexbt_api_client::rest::MexbtRestClient;
//! use mexbt_api_client::types::BTCUSD;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MexbtRestClient::new();
//!     let book = client.get_order_book(BTCUSD).await?;
//!     println!("Best bid: {:?}", book.best_bid());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiRejection, MexbtError};
pub use rest::{Environment, MexbtClient, MexbtRestClient};
pub use types::{Accepted, ApiStatus, ModifyAction, OrderType, Side};

/// Result type alias using MexbtError
pub type Result<T> = std::result::Result<T, MexbtError>;
