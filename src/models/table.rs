use super::filters::{DayFilter, MonthFilter};
use super::trip::TripRecord;

/// Which optional columns the source dataset carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub end_time: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl Columns {
    /// Every optional column present (Chicago / New York City layout).
    pub fn full() -> Self {
        Self {
            end_time: true,
            gender: true,
            birth_year: true,
        }
    }
}

/// Ordered trip records of one dataset, in source file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    columns: Columns,
    trips: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(columns: Columns, trips: Vec<TripRecord>) -> Self {
        Self { columns, trips }
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn has_gender(&self) -> bool {
        self.columns.gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.columns.birth_year
    }

    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only the records matching both filters. Relative order is kept
    /// and the records themselves are never touched.
    pub fn filtered(mut self, month: MonthFilter, day: DayFilter) -> Self {
        self.trips
            .retain(|t| month.matches(t.month()) && day.matches(t.weekday()));
        self
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
