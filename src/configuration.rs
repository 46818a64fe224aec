use chrono::Weekday;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> String;
    fn start_hour(&self) -> u32;
    fn end_hour(&self) -> u32;
    fn slot_minutes(&self) -> u32;
    fn weekdays(&self) -> Vec<Weekday>;
}
