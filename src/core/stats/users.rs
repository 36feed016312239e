use super::mode::{mode_lowest, value_counts};
use crate::models::TripTable;

/// Result for a column that a dataset may not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    /// The dataset has no such column (or no usable value in it).
    Missing,
}

impl<T> Availability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Availability::Available(v) => Some(v),
            Availability::Missing => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Count per user type, most frequent first. Empty cells are skipped.
    pub user_types: Vec<(String, usize)>,
    pub genders: Availability<Vec<(String, usize)>>,
    pub birth_years: Availability<BirthYearStats>,
}

/// `None` when the table is empty.
pub fn user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }

    let user_types = owned_counts(table.iter().filter_map(|t| t.user_type.as_deref()));

    let genders = if table.has_gender() {
        Availability::Available(owned_counts(
            table.iter().filter_map(|t| t.gender.as_deref()),
        ))
    } else {
        Availability::Missing
    };

    let birth_years = if table.has_birth_year() {
        birth_year_stats(table)
            .map(Availability::Available)
            .unwrap_or(Availability::Missing)
    } else {
        Availability::Missing
    };

    Some(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_year_stats(table: &TripTable) -> Option<BirthYearStats> {
    let years = || table.iter().filter_map(|t| t.birth_year);
    Some(BirthYearStats {
        earliest: years().min()?,
        most_recent: years().max()?,
        most_common: mode_lowest(years())?,
    })
}

fn owned_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}
