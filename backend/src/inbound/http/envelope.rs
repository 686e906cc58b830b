//! Success envelope shared by the API endpoints.
//!
//! ```json
//! {"code": 0, "message": "register ok", "data": {"id": 1, "email": "a@x.com"}}
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success code carried by every [`Envelope`].
pub const SUCCESS_CODE: u16 = 0;

/// Typed success envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    /// Always `0` on success.
    #[schema(example = 0)]
    pub code: u16,
    /// Operation-specific confirmation text.
    pub message: String,
    /// Operation result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap a successful result.
    ///
    /// ```
    /// use jobstream::inbound::http::envelope::Envelope;
    ///
    /// let envelope = Envelope::ok("ok", vec![1, 2]);
    /// assert_eq!(envelope.code, 0);
    /// assert_eq!(envelope.data, Some(vec![1, 2]));
    /// ```
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: message.into(),
            data: Some(data),
        }
    }
}
