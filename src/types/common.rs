//! Common domain types for meXBT API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bitcoin against US dollar.
pub const BTCUSD: &str = "BTCUSD";
/// Bitcoin against Mexican peso.
pub const BTCMXN: &str = "BTCMXN";

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Map the numeric side used in trade and open-order payloads.
    ///
    /// meXBT reports `0` for buy and `1` for sell.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Order type for trading. Sent on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// Limit order - execute at specified price or better
    Limit,
    /// Market order - execute immediately at best available price
    Market,
}

impl OrderType {
    /// Wire code for this order type.
    pub fn code(self) -> u8 {
        match self {
            OrderType::Limit => 0,
            OrderType::Market => 1,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
        }
    }
}

impl Serialize for OrderType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(OrderType::Limit),
            1 => Ok(OrderType::Market),
            other => Err(serde::de::Error::custom(format!(
                "unknown order type code {other}"
            ))),
        }
    }
}

/// How to modify a resting order. Sent on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifyAction {
    /// Move the order to the top of the book
    MoveToTop,
    /// Execute the order immediately against the book
    ExecuteNow,
}

impl ModifyAction {
    /// Wire code for this action.
    pub fn code(self) -> u8 {
        match self {
            ModifyAction::MoveToTop => 0,
            ModifyAction::ExecuteNow => 1,
        }
    }
}

impl Serialize for ModifyAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ModifyAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(ModifyAction::MoveToTop),
            1 => Ok(ModifyAction::ExecuteNow),
            other => Err(serde::de::Error::custom(format!(
                "unknown modify action code {other}"
            ))),
        }
    }
}
