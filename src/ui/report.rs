//! Text rendering of the four statistics blocks.

use crate::core::stats::{
    Availability, DurationStats, StationStats, TimeStats, UserStats, duration_stats,
    station_stats, time_stats, user_stats,
};
use crate::models::TripTable;
use crate::models::filters::{month_title, weekday_title};
use crate::utils::formatting::{pad_right, secs2readable, trim_float};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

pub const NO_DATA: &str = "No trips available to compute these statistics.";
pub const NO_GENDER: &str = "There is no gender data in this dataset.";
pub const NO_BIRTH_YEAR: &str = "There is no birth year data in this dataset.";

/// The statistics passes, in the order they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reporter {
    Time,
    Station,
    Duration,
    Users,
}

impl Reporter {
    pub const ALL: [Reporter; 4] = [
        Reporter::Time,
        Reporter::Station,
        Reporter::Duration,
        Reporter::Users,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Reporter::Time => "Calculating The Most Frequent Times of Travel...",
            Reporter::Station => "Calculating The Most Popular Stations and Trip...",
            Reporter::Duration => "Calculating Trip Duration...",
            Reporter::Users => "Calculating User Stats...",
        }
    }

    /// Compute this pass over `table` and render its fact lines.
    pub fn lines(&self, table: &TripTable) -> Vec<String> {
        let lines = match self {
            Reporter::Time => time_stats(table).map(|s| time_lines(&s)),
            Reporter::Station => station_stats(table).map(|s| station_lines(&s)),
            Reporter::Duration => duration_stats(table).map(|s| duration_lines(&s)),
            Reporter::Users => user_stats(table).map(|s| user_lines(&s)),
        };
        lines.unwrap_or_else(|| vec![NO_DATA.to_string()])
    }
}

pub fn time_lines(stats: &TimeStats) -> Vec<String> {
    vec![
        format!("The most common month: {}", month_title(stats.popular_month)),
        format!(
            "The most common day of week: {}",
            weekday_title(stats.popular_weekday)
        ),
        format!("The most common start hour: {}", stats.popular_hour),
    ]
}

pub fn station_lines(stats: &StationStats) -> Vec<String> {
    vec![
        format!("Most commonly used start station: {}", stats.start_station),
        format!("Most commonly used end station: {}", stats.end_station),
        format!(
            "Most frequent combination of start and end station: {}",
            stats.trip
        ),
    ]
}

pub fn duration_lines(stats: &DurationStats) -> Vec<String> {
    vec![
        format!(
            "Total travel time: {} s ({})",
            trim_float(stats.total_seconds),
            secs2readable(stats.total_seconds)
        ),
        format!(
            "Mean travel time: {} s ({})",
            trim_float(stats.mean_seconds),
            secs2readable(stats.mean_seconds)
        ),
    ]
}

pub fn user_lines(stats: &UserStats) -> Vec<String> {
    let mut lines = vec!["Counts of user types:".to_string()];
    lines.extend(count_lines(&stats.user_types));

    match &stats.genders {
        Availability::Available(counts) => {
            lines.push("Counts of gender:".to_string());
            lines.extend(count_lines(counts));
        }
        Availability::Missing => lines.push(NO_GENDER.to_string()),
    }

    match &stats.birth_years {
        Availability::Available(years) => {
            lines.push(format!("The earliest year of birth: {}", years.earliest));
            lines.push(format!("The most recent year of birth: {}", years.most_recent));
            lines.push(format!("The most common year of birth: {}", years.most_common));
        }
        Availability::Missing => lines.push(NO_BIRTH_YEAR.to_string()),
    }

    lines
}

fn count_lines(counts: &[(String, usize)]) -> Vec<String> {
    let width = counts.iter().map(|(v, _)| v.width()).max().unwrap_or(0);
    counts
        .iter()
        .map(|(value, n)| format!("  {}  {n}", pad_right(value, width)))
        .collect()
}

/// One printed block: heading, facts, optional timing line and divider.
pub fn render_block(
    heading: &str,
    lines: &[String],
    elapsed: Option<Duration>,
    divider: &str,
) -> String {
    let mut out = format!("\n{heading}\n\n");
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    if let Some(elapsed) = elapsed {
        out.push_str(&format!("\nThis took {} seconds.\n", elapsed.as_secs_f64()));
    }
    out.push_str(divider);
    out
}
