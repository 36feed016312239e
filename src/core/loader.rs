//! Dataset loading: fetch a city's table and apply the month/day filters.

use crate::dataset::TripSource;
use crate::errors::AppResult;
use crate::models::{FilterSelection, TripTable};
use log::info;

/// Load the trips of `selection.city` and keep those matching the month and
/// day filters (logical AND). Source order is preserved.
pub fn load<S: TripSource + ?Sized>(source: &S, selection: &FilterSelection) -> AppResult<TripTable> {
    let table = source.load_city(selection.city)?;
    let total = table.len();

    let filtered = table.filtered(selection.month, selection.day);
    info!(
        "{}: kept {} of {} trips (month={}, day={})",
        selection.city.name(),
        filtered.len(),
        total,
        selection.month.name(),
        selection.day.name()
    );

    Ok(filtered)
}
