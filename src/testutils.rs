use crate::configuration::Configuration;
use crate::store::BookingStore;
use crate::types::{Booking, NewBooking, StoreError};
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Utc, Weekday};
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};
use uuid::Uuid;

pub struct MockBookingStoreInner {
    pub available: AtomicBool,
    pub calls_to_booked_times: AtomicU64,
    pub calls_to_find_booking: AtomicU64,
    pub calls_to_insert_if_absent: AtomicU64,
    pub bookings: Mutex<Vec<Booking>>,
}

#[derive(Clone)]
pub struct MockBookingStore(pub Arc<MockBookingStoreInner>);

impl MockBookingStore {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingStoreInner {
            available: AtomicBool::new(true),
            calls_to_booked_times: AtomicU64::default(),
            calls_to_find_booking: AtomicU64::default(),
            calls_to_insert_if_absent: AtomicU64::default(),
            bookings: Mutex::default(),
        }))
    }

    fn check_available(&self) -> Result<(), StoreError> {
        match self.0.available.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(StoreError::Unavailable("supposed to fail".into())),
        }
    }
}

impl BookingStore for MockBookingStore {
    fn booked_times(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, StoreError> {
        self.0.calls_to_booked_times.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut times: Vec<NaiveTime> = self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|booking| booking.date == date)
            .map(|booking| booking.time)
            .collect();
        times.sort_unstable();
        Ok(times)
    }

    fn find_booking(
        &self,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Booking>, StoreError> {
        self.0.calls_to_find_booking.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        Ok(self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|booking| booking.date == date && booking.time == time)
            .cloned())
    }

    fn insert_if_absent(&self, booking: NewBooking) -> Result<Uuid, StoreError> {
        self.0
            .calls_to_insert_if_absent
            .fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut bookings = self.0.bookings.lock().unwrap();
        if bookings
            .iter()
            .any(|existing| existing.date == booking.date && existing.time == booking.time)
        {
            return Err(StoreError::AlreadyBooked);
        }

        let id = Uuid::new_v4();
        bookings.push(Booking {
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

#[derive(Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn port(&self) -> String {
        "0".into()
    }

    fn start_hour(&self) -> u32 {
        9
    }

    fn end_hour(&self) -> u32 {
        13
    }

    fn slot_minutes(&self) -> u32 {
        30
    }

    fn weekdays(&self) -> Vec<Weekday> {
        crate::schedule::workweek()
    }
}

/// The next calendar date after today falling on `weekday`. Keeps the http
/// tests on future, bookable dates.
pub fn next_weekday(weekday: Weekday) -> NaiveDate {
    let mut date = Local::now().date_naive();
    loop {
        date += Duration::days(1);
        if date.weekday() == weekday {
            return date;
        }
    }
}
