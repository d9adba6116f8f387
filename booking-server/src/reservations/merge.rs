//! Role-conditional merge of an update payload into a reservation
//!
//! Dates are always overwritten. The guest list is replaced wholesale for
//! the booking role and left untouched for blocks, no matter what the
//! payload carries. Persistence is the caller's job.

use chrono::NaiveDate;
use shared::models::GuestPayload;

use super::model::{Reservation, ReservationKind};

pub fn merge_into(
    target: &mut Reservation,
    begin: NaiveDate,
    end: NaiveDate,
    incoming: Vec<GuestPayload>,
) {
    target.begin_date = begin;
    target.end_date = end;
    if let ReservationKind::Booking { guests, .. } = &mut target.kind {
        *guests = incoming;
    }
}
