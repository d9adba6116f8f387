//! Guest row

/// Guest row (`guest` table)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GuestRow {
    pub id: i64,
    pub uuid: String,
    pub reservation_id: i64,
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
}
