//! Custom serde helpers for meXBT's loosely typed JSON.
//!
//! meXBT sends prices and quantities sometimes as numbers and sometimes as
//! strings, leaves lists `null` when they are empty, and may send an empty
//! `RejectReason`. These modules normalize those shapes.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Deserialize an `f64` from either a JSON number or a numeric string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use mexbt_api_client::types::serde_helpers::flexible_f64;
///
/// #[derive(Deserialize, Debug)]
/// struct Level {
///     #[serde(deserialize_with = "flexible_f64::deserialize")]
///     px: f64,
/// }
///
/// let from_number: Level = serde_json::from_str(r#"{"px":2.5}"#).unwrap();
/// let from_string: Level = serde_json::from_str(r#"{"px":"2.5"}"#).unwrap();
/// assert_eq!(from_number.px, 2.5);
/// assert_eq!(from_string.px, 2.5);
/// ```
pub mod flexible_f64 {
    use super::*;

    /// Deserialize a number or numeric string into `f64`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlexibleF64Visitor;

        impl<'de> de::Visitor<'de> for FlexibleF64Visitor {
            type Value = f64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a numeric string")
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v as f64)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v as f64)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v.is_empty() {
                    return Ok(0.0);
                }
                v.trim().parse().map_err(de::Error::custom)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(0.0)
            }
        }

        deserializer.deserialize_any(FlexibleF64Visitor)
    }
}

/// Deserialize `null` as the type's default value.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use mexbt_api_client::types::serde_helpers::null_as_default;
///
/// #[derive(Deserialize, Debug)]
/// struct Trades {
///     #[serde(deserialize_with = "null_as_default::deserialize", default)]
///     trades: Vec<u64>,
/// }
///
/// let trades: Trades = serde_json::from_str(r#"{"trades":null}"#).unwrap();
/// assert!(trades.trades.is_empty());
/// ```
pub mod null_as_default {
    use super::*;

    /// Deserialize a value, mapping `null` to `T::default()`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Deserialize<'de> + Default,
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserialize an empty string as `None`.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use mexbt_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Status {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     reason: Option<String>,
/// }
///
/// let status: Status = serde_json::from_str(r#"{"reason":""}"#).unwrap();
/// assert!(status.reason.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Level {
        #[serde(deserialize_with = "flexible_f64::deserialize", default)]
        px: f64,
    }

    #[test]
    fn test_flexible_f64_accepts_integers() {
        let level: Level = serde_json::from_str(r#"{"px":7}"#).unwrap();
        assert_eq!(level.px, 7.0);
    }

    #[test]
    fn test_flexible_f64_null_and_missing() {
        let level: Level = serde_json::from_str(r#"{"px":null}"#).unwrap();
        assert_eq!(level.px, 0.0);
        let level: Level = serde_json::from_str("{}").unwrap();
        assert_eq!(level.px, 0.0);
    }

    #[test]
    fn test_flexible_f64_rejects_garbage() {
        assert!(serde_json::from_str::<Level>(r#"{"px":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Level>(r#"{"px":true}"#).is_err());
    }

    #[test]
    fn test_empty_string_as_none_keeps_text() {
        #[derive(Deserialize)]
        struct Status {
            #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
            reason: Option<String>,
        }

        let status: Status = serde_json::from_str(r#"{"reason":"Not enough"}"#).unwrap();
        assert_eq!(status.reason.as_deref(), Some("Not enough"));
        let status: Status = serde_json::from_str(r#"{"reason":null}"#).unwrap();
        assert!(status.reason.is_none());
    }
}
