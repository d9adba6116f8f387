//! Shared helpers for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use shared::models::{GuestPayload, ReservationRequest};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory database with migrations (and property seeds) applied.
///
/// A single pooled connection keeps the in-memory database alive and makes
/// every query see the same data.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to apply migrations");
    pool
}

/// Uuid of the n-th seeded property (0-based)
pub async fn seeded_property(pool: &SqlitePool, index: i64) -> String {
    sqlx::query_scalar::<_, String>("SELECT uuid FROM property ORDER BY id LIMIT 1 OFFSET ?")
        .bind(index)
        .fetch_one(pool)
        .await
        .expect("seeded property missing")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn guest(name: &str, age: i32) -> GuestPayload {
    GuestPayload {
        name: name.into(),
        age,
        email: None,
        document_type: None,
        document_number: None,
    }
}

pub fn request(property_id: &str, begin: NaiveDate, end: NaiveDate) -> ReservationRequest {
    ReservationRequest {
        property_id: property_id.into(),
        begin_at: begin,
        end_at: end,
        guests: vec![guest("John Doe", 35)],
    }
}

/// Number of guest rows currently attached to a reservation
pub async fn guest_count(pool: &SqlitePool, reservation_uuid: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM guest g \
         JOIN reservation r ON r.id = g.reservation_id \
         WHERE r.uuid = ?",
    )
    .bind(reservation_uuid)
    .fetch_one(pool)
    .await
    .expect("guest count query failed")
}
