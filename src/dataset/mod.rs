//! Dataset sources: where trip tables come from.

pub mod csv_source;
pub mod timestamp;

use crate::errors::AppResult;
use crate::models::{City, TripTable};

pub use csv_source::CsvSource;

/// Read-only provider of the full, unfiltered trip table of a city.
pub trait TripSource {
    fn load_city(&self, city: City) -> AppResult<TripTable>;
}

impl<S: TripSource + ?Sized> TripSource for &S {
    fn load_city(&self, city: City) -> AppResult<TripTable> {
        (**self).load_city(city)
    }
}
