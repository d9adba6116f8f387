//! Property row

use shared::models::PropertyInfo;
use uuid::Uuid;

/// Property row (`property` table)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PropertyRow {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub description: Option<String>,
}

impl PropertyRow {
    /// API shape of this row. The stored uuid is written by us, so a parse
    /// failure means a corrupted database rather than bad input.
    pub fn to_info(&self) -> Option<PropertyInfo> {
        let uuid = Uuid::parse_str(&self.uuid).ok()?;
        Some(PropertyInfo {
            uuid,
            name: self.name.clone(),
            description: self.description.clone(),
        })
    }
}
