//! CSV-backed trip source: one file per city inside the data directory.

use crate::dataset::TripSource;
use crate::dataset::timestamp::parse_start_time;
use crate::errors::{AppError, AppResult};
use crate::models::{City, Columns, TripRecord, TripTable};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: [&str; 5] = [START_TIME, TRIP_DURATION, START_STATION, END_STATION, USER_TYPE];

/// One CSV row as stored on disk. Empty cells become `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Stored as a float ("1989.0"); unreadable cells are treated as missing.
    #[serde(rename = "Birth Year", default, deserialize_with = "csv::invalid_option")]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_trip(self, start_time: NaiveDateTime) -> TripRecord {
        let mut trip = TripRecord::new(
            start_time,
            self.trip_duration,
            self.start_station,
            self.end_station,
        );
        trip.end_time = self.end_time;
        trip.user_type = self.user_type;
        trip.gender = self.gender;
        trip.birth_year = self
            .birth_year
            .filter(|y| y.is_finite())
            .map(|y| y.trunc() as i32);
        trip
    }
}

#[derive(Debug, Clone)]
pub struct CsvSource {
    data_dir: PathBuf,
}

impl CsvSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the dataset file of `city`.
    pub fn dataset_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Parse a whole CSV document into a trip table.
    ///
    /// Fails on a missing required column, a malformed row, or a start time
    /// that cannot be parsed. Missing optional columns are only recorded in
    /// the table's [`Columns`].
    pub fn read_table<R: Read>(input: R) -> AppResult<TripTable> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
        let headers = reader.headers()?.clone();
        let has = |name: &str| headers.iter().any(|h| h == name);

        if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|&c| !has(c)) {
            return Err(AppError::MissingColumn(missing));
        }

        let columns = Columns {
            end_time: has(END_TIME),
            gender: has(GENDER),
            birth_year: has(BIRTH_YEAR),
        };

        let mut trips = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            let line = record.position().map_or(0, |p| p.line());
            let raw: RawTrip = record.deserialize(Some(&headers))?;
            let start_time =
                parse_start_time(&raw.start_time).ok_or_else(|| AppError::InvalidTimestamp {
                    line,
                    value: raw.start_time.clone(),
                })?;
            trips.push(raw.into_trip(start_time));
        }

        debug!(
            "parsed {} trips (gender: {}, birth year: {})",
            trips.len(),
            columns.gender,
            columns.birth_year
        );
        Ok(TripTable::new(columns, trips))
    }
}

impl TripSource for CsvSource {
    fn load_city(&self, city: City) -> AppResult<TripTable> {
        let path = self.dataset_path(city);
        if !path.is_file() {
            return Err(AppError::DatasetNotFound(path));
        }

        info!("loading {} dataset from {}", city.name(), path.display());
        let file = File::open(&path).map_err(|source| AppError::DatasetUnreadable {
            path: path.clone(),
            source,
        })?;
        Self::read_table(BufReader::new(file))
    }
}
