//! Statistics passes over a filtered trip table.
//!
//! Each pass is independent and read-only; all of them return `None` on an
//! empty table instead of inventing a value.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod users;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use users::{Availability, BirthYearStats, UserStats, user_stats};
