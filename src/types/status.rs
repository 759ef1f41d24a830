//! The acceptance status every meXBT response carries.

use serde::{Deserialize, Serialize};

use crate::error::{ApiRejection, MexbtError};
use crate::types::serde_helpers::empty_string_as_none;

/// `IsAccepted` / `RejectReason` pair present in every response.
///
/// Response types hold this as a flattened field named `status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    /// Whether the exchange accepted the operation.
    #[serde(rename = "IsAccepted", default)]
    pub is_accepted: bool,
    /// Why the exchange refused the operation, if it did.
    #[serde(
        rename = "RejectReason",
        default,
        deserialize_with = "empty_string_as_none::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub reject_reason: Option<String>,
}

impl ApiStatus {
    /// Convert a refused status into [`MexbtError::Rejected`].
    pub fn check(&self) -> Result<(), MexbtError> {
        if self.is_accepted {
            Ok(())
        } else {
            Err(MexbtError::Rejected(ApiRejection::new(
                self.reject_reason.clone().unwrap_or_default(),
            )))
        }
    }
}

/// Access to the [`ApiStatus`] of a response.
pub trait Accepted: Sized {
    /// The response's acceptance status.
    fn status(&self) -> &ApiStatus;

    /// Whether the exchange accepted the operation.
    fn is_accepted(&self) -> bool {
        self.status().is_accepted
    }

    /// Keep the response only if the exchange accepted it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mexbt_api_client::rest::private::CreateOrderResponse;
    /// use mexbt_api_client::types::Accepted;
    ///
    /// let body = r#"{"IsAccepted":false,"RejectReason":"insufficient funds"}"#;
    /// let response: CreateOrderResponse = serde_json::from_str(body).unwrap();
    /// let err = response.accepted().unwrap_err();
    /// assert_eq!(err.reject_reason(), Some("insufficient funds"));
    /// ```
    fn accepted(self) -> Result<Self, MexbtError> {
        self.status().check()?;
        Ok(self)
    }
}

impl Accepted for ApiStatus {
    fn status(&self) -> &ApiStatus {
        self
    }
}

/// Implement [`Accepted`] for response types with a `status` field.
macro_rules! impl_accepted {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::Accepted for $ty {
                fn status(&self) -> &$crate::types::ApiStatus {
                    &self.status
                }
            }
        )+
    };
}

pub(crate) use impl_accepted;
