use crate::models::TripTable;

/// Total and average trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

/// `None` when the table is empty (the mean is undefined).
pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let total_seconds: f64 = table.iter().map(|t| t.duration).sum();
    Some(DurationStats {
        trips: table.len(),
        total_seconds,
        mean_seconds: total_seconds / table.len() as f64,
    })
}
