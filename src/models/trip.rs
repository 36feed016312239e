use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

/// One bikeshare ride.
///
/// Month, weekday and hour are derived from the start time when the record is
/// built. The start time is only reachable through a getter so the derived
/// fields cannot drift away from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    start_time: NaiveDateTime,
    month: u32,
    weekday: u32,
    hour: u32,

    /// Raw end time as found in the dataset.
    pub end_time: Option<String>,
    /// Trip duration in seconds.
    pub duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        duration: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            end_time: None,
            duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn with_user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Month number, 1 = January.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Weekday number, 0 = Monday .. 6 = Sunday.
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// Hour of day, 0..=23.
    pub fn hour(&self) -> u32 {
        self.hour
    }
}
