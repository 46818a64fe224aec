use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A persisted reservation. Only booked slots are stored; the absence of a
/// record for a (date, time) pair means the slot is free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_name: String,
    pub customer_phone: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for a booking insert. The store assigns id and created_at.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_name: String,
    pub customer_phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotState {
    Free,
    Booked,
}

/// A candidate slot of a single day, derived fresh on every query.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub is_past: bool,
    pub state: SlotState,
}

/// Result of a day query: a display label plus the ordered slots.
/// Non-bookable days carry an explanatory label and no slots.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    pub label: String,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Requested time is not a bookable slot")]
    InvalidSlot,
    #[error("Slot is no longer available")]
    AlreadyBooked,
    #[error("Record store unavailable: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("A booking already exists for this slot")]
    AlreadyBooked,
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyBooked => BookingError::AlreadyBooked,
            StoreError::Unavailable(msg) => BookingError::Storage(msg),
        }
    }
}
