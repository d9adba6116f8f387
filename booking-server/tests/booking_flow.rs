//! Booking workflow integration tests
//!
//! Exercise the full resolve → guard → overlap-check → merge → persist
//! sequence against a real (in-memory) database.

mod common;

use booking_server::reservations::{ReservationError, booking};
use common::{date, guest, guest_count, request, seeded_property, test_pool};

#[tokio::test]
async fn create_booking_happy_path() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();

    assert_eq!(created.status, "BOOKED");
    assert_eq!(created.property.uuid.to_string(), property);
    assert_eq!(created.guests.len(), 1);
    assert_eq!(created.begin_at, date(2024, 10, 1));
    assert_eq!(created.end_at, date(2024, 10, 30));

    // Round trip through the read path
    let fetched = booking::get(&pool, &created.uuid.to_string()).await.unwrap();
    assert_eq!(fetched.uuid, created.uuid);
    assert_eq!(fetched.guests.len(), 1);
}

#[tokio::test]
async fn create_booking_unknown_property_is_not_found() {
    let pool = test_pool().await;

    let err = booking::create(
        &pool,
        &request(
            "99999999-9999-4999-8999-999999999999",
            date(2024, 10, 1),
            date(2024, 10, 2),
        ),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        ReservationError::NotFound(msg) if msg == "The Property was not found in the Database"
    ));
}

#[tokio::test]
async fn create_booking_malformed_property_id_is_a_validation_error() {
    let pool = test_pool().await;

    let err = booking::create(
        &pool,
        &request("this-is-not-a-uuid-but-36-chars-long", date(2024, 10, 1), date(2024, 10, 2)),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ReservationError::Validation(_)));
}

#[tokio::test]
async fn disjoint_ranges_do_not_conflict() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();

    // Scenario: a September stay on the same property is fine
    let ok = booking::create(&pool, &request(&property, date(2024, 9, 1), date(2024, 9, 30)))
        .await
        .unwrap();
    assert_eq!(ok.status, "BOOKED");
}

#[tokio::test]
async fn overlapping_ranges_conflict() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();

    let err = booking::create(&pool, &request(&property, date(2024, 10, 20), date(2024, 11, 10)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReservationError::Conflict(msg)
            if msg == "Error on saving Booking. The dates selected overlaps another existing booking"
    ));
}

#[tokio::test]
async fn same_dates_on_another_property_do_not_conflict() {
    let pool = test_pool().await;
    let first = seeded_property(&pool, 0).await;
    let second = seeded_property(&pool, 1).await;

    booking::create(&pool, &request(&first, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let ok = booking::create(&pool, &request(&second, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    assert_eq!(ok.status, "BOOKED");
}

#[tokio::test]
async fn cancel_then_cancel_again_conflicts() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let uuid = created.uuid.to_string();

    booking::cancel(&pool, &uuid).await.unwrap();
    let fetched = booking::get(&pool, &uuid).await.unwrap();
    assert_eq!(fetched.status, "CANCELED");

    let err = booking::cancel(&pool, &uuid).await.unwrap_err();
    assert!(matches!(
        err,
        ReservationError::Conflict(msg) if msg == "You can cancel bookings only with BOOKED status"
    ));
}

#[tokio::test]
async fn canceled_booking_frees_its_slot() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    booking::cancel(&pool, &created.uuid.to_string()).await.unwrap();

    // The exact same range is available again
    let ok = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    assert_eq!(ok.status, "BOOKED");
}

#[tokio::test]
async fn rebook_restores_a_canceled_booking() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let uuid = created.uuid.to_string();

    booking::cancel(&pool, &uuid).await.unwrap();
    booking::rebook(&pool, &uuid).await.unwrap();

    let fetched = booking::get(&pool, &uuid).await.unwrap();
    assert_eq!(fetched.status, "BOOKED");
}

#[tokio::test]
async fn rebook_fails_when_the_slot_was_taken_meanwhile() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let uuid = created.uuid.to_string();
    booking::cancel(&pool, &uuid).await.unwrap();

    // Someone else grabs part of the range
    booking::create(&pool, &request(&property, date(2024, 10, 15), date(2024, 10, 20)))
        .await
        .unwrap();

    let err = booking::rebook(&pool, &uuid).await.unwrap_err();
    assert!(matches!(err, ReservationError::Conflict(_)));

    // Still canceled
    let fetched = booking::get(&pool, &uuid).await.unwrap();
    assert_eq!(fetched.status, "CANCELED");
}

#[tokio::test]
async fn rebook_from_booked_conflicts() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();

    let err = booking::rebook(&pool, &created.uuid.to_string()).await.unwrap_err();
    assert!(matches!(
        err,
        ReservationError::Conflict(msg) if msg == "You can rebook bookings with CANCELED status"
    ));
}

#[tokio::test]
async fn update_moves_dates_and_replaces_guests() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let uuid = created.uuid.to_string();
    assert_eq!(guest_count(&pool, &uuid).await, 1);

    let mut change = request(&property, date(2024, 11, 1), date(2024, 11, 5));
    change.guests = vec![guest("Alice", 29), guest("Bob", 31)];

    let updated = booking::update(&pool, &uuid, &change).await.unwrap();
    assert_eq!(updated.begin_at, date(2024, 11, 1));
    assert_eq!(updated.end_at, date(2024, 11, 5));
    assert_eq!(updated.guests.len(), 2);

    // The old guest row is gone, only the replacement list remains
    assert_eq!(guest_count(&pool, &uuid).await, 2);
}

#[tokio::test]
async fn update_does_not_collide_with_its_own_range() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();

    // Shrinking inside the currently held range must not self-conflict
    let updated = booking::update(
        &pool,
        &created.uuid.to_string(),
        &request(&property, date(2024, 10, 5), date(2024, 10, 25)),
    )
    .await
    .unwrap();
    assert_eq!(updated.begin_at, date(2024, 10, 5));
}

#[tokio::test]
async fn update_of_a_canceled_booking_conflicts() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let uuid = created.uuid.to_string();
    booking::cancel(&pool, &uuid).await.unwrap();

    let err = booking::update(&pool, &uuid, &request(&property, date(2024, 11, 1), date(2024, 11, 5)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ReservationError::Conflict(msg) if msg == "You can update bookings only with BOOKED status"
    ));
}

#[tokio::test]
async fn delete_removes_the_booking_and_its_guests() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let uuid = created.uuid.to_string();

    booking::delete(&pool, &uuid).await.unwrap();

    let err = booking::get(&pool, &uuid).await.unwrap_err();
    assert!(matches!(err, ReservationError::NotFound(_)));

    let orphans = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guest")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn delete_works_from_canceled_too() {
    let pool = test_pool().await;
    let property = seeded_property(&pool, 0).await;

    let created = booking::create(&pool, &request(&property, date(2024, 10, 1), date(2024, 10, 30)))
        .await
        .unwrap();
    let uuid = created.uuid.to_string();
    booking::cancel(&pool, &uuid).await.unwrap();

    booking::delete(&pool, &uuid).await.unwrap();
    assert!(booking::get(&pool, &uuid).await.is_err());
}

#[tokio::test]
async fn identifier_errors_are_distinct_kinds() {
    let pool = test_pool().await;

    // Empty and malformed identifiers are caller mistakes
    assert!(matches!(
        booking::get(&pool, "").await.unwrap_err(),
        ReservationError::Validation(_)
    ));
    assert!(matches!(
        booking::get(&pool, "garbage").await.unwrap_err(),
        ReservationError::Validation(_)
    ));

    // A well-formed identifier with no record is absence
    assert!(matches!(
        booking::get(&pool, "99999999-9999-4999-8999-999999999999")
            .await
            .unwrap_err(),
        ReservationError::NotFound(msg) if msg == "The Booking was not found in the Database"
    ));
}
