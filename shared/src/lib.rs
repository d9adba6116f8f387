//! Shared types for the booking availability service
//!
//! Wire-level data models exchanged between `booking-server` and its clients.
//! Nothing here touches the database or the HTTP framework.

pub mod models;
