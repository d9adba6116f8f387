//! Guest Model

use serde::{Deserialize, Serialize};

/// Guest entry of a booking, used both in requests and responses.
///
/// Guests are value copies owned by their reservation; the API never
/// addresses a guest individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPayload {
    pub name: String,
    pub age: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}
