//! meXBT REST API client.
//!
//! Every operation is one JSON POST to `https://<scope>-api.mexbt.com/v1/<path>`.
//!
//! # Trait-based API
//!
//! The [`MexbtClient`] trait abstracts all REST API operations, enabling
//! mock implementations for testing.
//!
//! ```rust,ignore
//! use mexbt_api_client::rest::{MexbtClient, MexbtRestClient};
//!
//! async fn use_client<C: MexbtClient>(client: &C) -> Result<(), mexbt_api_client::MexbtError> {
//!     let pairs = client.get_product_pairs().await?;
//!     println!("{} pairs", pairs.product_pairs.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{MexbtRestClient, MexbtRestClientBuilder};
pub use endpoints::Environment;
pub use traits::MexbtClient;
