//! Common types used across the meXBT client library.

pub mod common;
pub mod serde_helpers;
mod status;

pub use common::*;
pub(crate) use status::impl_accepted;
pub use status::{Accepted, ApiStatus};
