use super::mode::mode;
use crate::models::{TripRecord, TripTable};

/// Joins start and end station into the composite trip key.
pub const TRIP_SEPARATOR: &str = " to ";

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// "<start> to <end>"
    pub trip: String,
}

pub fn trip_key(trip: &TripRecord) -> String {
    format!("{}{}{}", trip.start_station, TRIP_SEPARATOR, trip.end_station)
}

/// `None` when the table is empty.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    Some(StationStats {
        start_station: mode(table.iter().map(|t| t.start_station.as_str()))?.to_string(),
        end_station: mode(table.iter().map(|t| t.end_station.as_str()))?.to_string(),
        trip: mode(table.iter().map(trip_key))?,
    })
}
