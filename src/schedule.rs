use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// Static slot grid: operating hours, granularity and bookable weekdays.
/// Fixed at startup, never edited at runtime.
#[derive(Debug, Clone)]
pub struct Schedule {
    start_hour: u32,
    end_hour: u32,
    slot_minutes: u32,
    weekdays: Vec<Weekday>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(9, 17, 30, workweek())
    }
}

pub fn workweek() -> Vec<Weekday> {
    vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
}

impl Schedule {
    pub fn new(start_hour: u32, end_hour: u32, slot_minutes: u32, weekdays: Vec<Weekday>) -> Self {
        Self {
            start_hour,
            end_hour,
            slot_minutes,
            weekdays,
        }
    }

    pub fn is_bookable_weekday(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday())
    }

    /// A date accepts bookings if it is not in the past relative to the
    /// caller-supplied `today` and falls on a bookable weekday.
    pub fn is_bookable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= today && self.is_bookable_weekday(date)
    }

    /// All slot start times of `date`, ascending. Empty for non-bookable
    /// weekdays. A trailing slot that would run past the closing hour is
    /// dropped.
    pub fn enumerate_slots(&self, date: NaiveDate) -> Vec<NaiveTime> {
        if !self.is_bookable_weekday(date) || self.slot_minutes == 0 {
            return vec![];
        }

        let closing = self.end_hour * 60;
        let mut slots = vec![];
        let mut minutes = self.start_hour * 60;
        while minutes + self.slot_minutes <= closing && minutes < 24 * 60 {
            if let Some(time) = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0) {
                slots.push(time);
            }
            minutes += self.slot_minutes;
        }
        slots
    }

    /// Weekday plus date, e.g. "Monday, 10 June 2024".
    pub fn day_label(&self, date: NaiveDate) -> String {
        date.format("%A, %-d %B %Y").to_string()
    }
}
