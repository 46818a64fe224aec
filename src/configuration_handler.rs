use crate::configuration::Configuration;
use crate::schedule::workweek;
use chrono::Weekday;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(about = "Slot-booking calendar service")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on
    #[arg(long, default_value = "3000")]
    port: String,

    /// First bookable hour of the day
    #[arg(long, default_value_t = 9)]
    start_hour: u32,

    /// Hour the last slot must end by (exclusive)
    #[arg(long, default_value_t = 17)]
    end_hour: u32,

    /// Slot duration in minutes
    #[arg(long, default_value_t = 30)]
    slot_minutes: u32,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> String {
        self.port.clone()
    }

    fn start_hour(&self) -> u32 {
        self.start_hour
    }

    fn end_hour(&self) -> u32 {
        self.end_hour
    }

    fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    fn weekdays(&self) -> Vec<Weekday> {
        workweek()
    }
}
