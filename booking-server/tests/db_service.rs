//! Database service smoke tests

use booking_server::db::DbService;

#[tokio::test]
async fn opens_a_file_database_and_applies_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("booking.db").display());

    let service = DbService::new(&url).await.unwrap();

    // Migrations ran: the schema exists and properties are seeded
    let properties = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM property")
        .fetch_one(&service.pool)
        .await
        .unwrap();
    assert!(properties >= 3);

    let mode = sqlx::query_scalar::<_, String>("PRAGMA journal_mode")
        .fetch_one(&service.pool)
        .await
        .unwrap();
    assert_eq!(mode, "wal");
}

#[tokio::test]
async fn fails_cleanly_when_the_database_cannot_be_opened() {
    // create_if_missing does not create parent directories
    let url = "sqlite:/nonexistent-booking-dir/deeper/booking.db";
    assert!(DbService::new(url).await.is_err());
}
