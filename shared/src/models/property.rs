//! Property Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rentable property as exposed by the API (read-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub uuid: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
