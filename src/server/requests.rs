//! Request body types.

use serde::Deserialize;

/// Body of `POST /write`.
///
/// Unknown fields are ignored. A missing `value` decodes as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WriteRequest {
    /// Text to persist.
    #[serde(default)]
    pub value: String,
}
