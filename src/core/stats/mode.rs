//! Frequency helpers shared by the statistics passes.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Count each distinct value. Entries come back in order of first occurrence.
pub fn tally<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => {
                if let Some(entry) = counts.get_mut(i) {
                    entry.1 += 1;
                }
            }
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

/// Most frequent value. Ties go to the value that occurred first.
///
/// Returns `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in tally(values) {
        // strictly greater: an equal count never displaces an earlier value
        if best.as_ref().is_none_or(|(_, b)| count > *b) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Most frequent value of an ordered domain. Ties go to the lowest value.
///
/// Used for months, weekdays, hours and birth years.
pub fn mode_lowest<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.as_ref().is_none_or(|(_, b)| count > *b) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Frequency per distinct value, most frequent first. Equal counts keep
/// first-occurrence order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts = tally(values);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
