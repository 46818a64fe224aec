use crate::schedule::Schedule;
use crate::store::BookingStore;
use crate::types::{BookingError, DaySchedule, NewBooking, Slot, SlotState};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

/// Classifies the slots of a day as free or booked and mediates the booking
/// transaction against the record store.
#[derive(Debug, Clone)]
pub struct BookingEngine<S: BookingStore> {
    schedule: Schedule,
    store: S,
}

impl<S: BookingStore> BookingEngine<S> {
    pub fn new(schedule: Schedule, store: S) -> Self {
        Self { schedule, store }
    }

    /// The slot states of `date`, in enumeration order. The booked times are
    /// read in one range scan so the result reflects a single snapshot of
    /// the store. Non-bookable weekdays yield no slots and an explanatory
    /// label.
    pub fn day_schedule(
        &self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<DaySchedule, BookingError> {
        let times = self.schedule.enumerate_slots(date);
        if times.is_empty() {
            return Ok(DaySchedule {
                label: format!("No slots on {}", self.schedule.day_label(date)),
                slots: vec![],
            });
        }

        let booked = self.store.booked_times(date)?;
        let slots = times
            .into_iter()
            .map(|time| Slot {
                date,
                time,
                is_past: date < today,
                state: if booked.contains(&time) {
                    SlotState::Booked
                } else {
                    SlotState::Free
                },
            })
            .collect();

        Ok(DaySchedule {
            label: self.schedule.day_label(date),
            slots,
        })
    }

    /// Books a slot. Validates the customer fields and the requested time
    /// against the slot grid, then delegates the check-then-insert to the
    /// store's atomic `insert_if_absent`. Exactly one record is created on
    /// success and none on any failure path.
    pub fn book_slot(
        &self,
        request: NewBooking,
        today: NaiveDate,
    ) -> Result<Uuid, BookingError> {
        let customer_name = request.customer_name.trim();
        let customer_phone = request.customer_phone.trim();
        if customer_name.is_empty() {
            return Err(BookingError::Validation(
                "customer name must not be empty".into(),
            ));
        }
        if customer_phone.is_empty() {
            return Err(BookingError::Validation(
                "customer phone must not be empty".into(),
            ));
        }

        if !self.schedule.is_bookable(request.date, today)
            || !self.schedule.enumerate_slots(request.date).contains(&request.time)
        {
            warn!(
                date = %request.date,
                time = %request.time,
                "Rejected booking attempt for a time outside the slot grid"
            );
            return Err(BookingError::InvalidSlot);
        }

        let id = self.store.insert_if_absent(NewBooking {
            date: request.date,
            time: request.time,
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
        })?;

        info!(date = %request.date, time = %request.time, %id, "Slot booked");
        Ok(id)
    }
}
