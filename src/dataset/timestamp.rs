//! Start time parsing.

use chrono::NaiveDateTime;

/// Accepted layouts, tried in order. `%.f` also matches a missing fraction.
const FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
