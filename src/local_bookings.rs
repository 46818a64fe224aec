use crate::store::BookingStore;
use crate::types::{Booking, NewBooking, StoreError};
use chrono::{NaiveDate, NaiveTime, Utc};
use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{Arc, Mutex},
};
use tracing::warn;
use uuid::Uuid;

/// In-memory record store. The mutex makes the check-and-insert of
/// `insert_if_absent` a single critical section, which is what upholds the
/// one-booking-per-slot invariant under concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    bookings: Arc<Mutex<HashMap<(NaiveDate, NaiveTime), Booking>>>,
}

impl BookingStore for LocalBookings {
    fn booked_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError> {
        let bookings = self.bookings.lock().unwrap();
        let mut times: Vec<NaiveTime> = bookings
            .keys()
            .filter(|(booked_date, _)| *booked_date == date)
            .map(|(_, time)| *time)
            .collect();
        times.sort_unstable();
        Ok(times)
    }

    fn find_booking(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Booking>, StoreError> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.get(&(date, time)).cloned())
    }

    fn insert_if_absent(&self, booking: NewBooking) -> Result<Uuid, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        match bookings.entry((booking.date, booking.time)) {
            Entry::Occupied(_) => {
                warn!(date = %booking.date, time = %booking.time, "Slot is already booked");
                Err(StoreError::AlreadyBooked)
            }
            Entry::Vacant(entry) => {
                let id = Uuid::new_v4();
                entry.insert(Booking {
                    id,
                    date: booking.date,
                    time: booking.time,
                    customer_name: booking.customer_name,
                    customer_phone: booking.customer_phone,
                    created_at: Utc::now(),
                });
                Ok(id)
            }
        }
    }
}
