pub mod city;
pub mod filters;
pub mod table;
pub mod trip;

pub use city::City;
pub use filters::{DayFilter, FilterSelection, MonthFilter};
pub use table::{Columns, TripTable};
pub use trip::TripRecord;
