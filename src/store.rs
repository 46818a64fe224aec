use crate::types::{Booking, NewBooking, StoreError};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

/// Record store holding the booked slots, logically keyed by (date, time).
///
/// `insert_if_absent` is the concurrency-critical operation: the store must
/// serialize concurrent inserts for the same key so that at most one
/// succeeds and every loser observes `StoreError::AlreadyBooked`.
pub trait BookingStore: Clone + Send + Sync + 'static {
    /// Times of all booked slots on `date`, ascending, read from one
    /// consistent snapshot.
    fn booked_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError>;
    fn find_booking(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Booking>, StoreError>;
    fn insert_if_absent(&self, booking: NewBooking) -> Result<Uuid, StoreError>;
}
