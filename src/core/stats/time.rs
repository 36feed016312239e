use super::mode::mode_lowest;
use crate::models::TripTable;

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// 1 = January
    pub popular_month: u32,
    /// 0 = Monday
    pub popular_weekday: u32,
    pub popular_hour: u32,
}

/// `None` when the table is empty.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    Some(TimeStats {
        popular_month: mode_lowest(table.iter().map(|t| t.month()))?,
        popular_weekday: mode_lowest(table.iter().map(|t| t.weekday()))?,
        popular_hour: mode_lowest(table.iter().map(|t| t.hour()))?,
    })
}
