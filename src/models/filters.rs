use super::city::City;
use std::fmt;

/// Months present in the datasets (first half of the year).
pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekdays, Monday first so the position equals the derived weekday number.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number
    Month(u32),
}

impl MonthFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name == ALL {
            return Some(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .position(|m| *m == name)
            .map(|i| MonthFilter::Month(i as u32 + 1))
    }

    /// Entries accepted at the month prompt.
    pub fn choices() -> Vec<&'static str> {
        std::iter::once(ALL).chain(MONTH_NAMES).collect()
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonthFilter::All => ALL,
            MonthFilter::Month(m) => MONTH_NAMES
                .get((*m as usize).wrapping_sub(1))
                .copied()
                .unwrap_or(ALL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    /// 0-based weekday number, Monday = 0
    Day(u32),
}

impl DayFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name == ALL {
            return Some(DayFilter::All);
        }
        WEEKDAY_NAMES
            .iter()
            .position(|d| *d == name)
            .map(|i| DayFilter::Day(i as u32))
    }

    /// Entries accepted at the day prompt.
    pub fn choices() -> Vec<&'static str> {
        std::iter::once(ALL).chain(WEEKDAY_NAMES).collect()
    }

    pub fn matches(&self, weekday: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == weekday,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayFilter::All => ALL,
            DayFilter::Day(d) => WEEKDAY_NAMES.get(*d as usize).copied().unwrap_or(ALL),
        }
    }
}

/// City, month and day chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// No month or day restriction.
    pub fn whole_city(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = match self.month {
            MonthFilter::All => "all months".to_string(),
            m => title_case(m.name()),
        };
        let day = match self.day {
            DayFilter::All => "all days".to_string(),
            d => format!("{}s", title_case(d.name())),
        };
        write!(f, "{} / {} / {}", self.city.title(), month, day)
    }
}

/// Display name for a derived month number ("January"), or the number itself
/// when it falls outside the calendar.
pub fn month_title(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Display name for a derived weekday number ("Monday").
pub fn weekday_title(weekday: u32) -> String {
    WEEKDAY_NAMES
        .get(weekday as usize)
        .map(|d| title_case(d))
        .unwrap_or_else(|| weekday.to_string())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
