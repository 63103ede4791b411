//! Typed aggregation stages shared by the reports.
//!
//! A report reads the collection once and folds the documents through
//! these stages: unwind a nested sequence, group by a key, reduce each
//! group with an [`Accumulator`], then sort and round for display.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Running count, sum, min and max of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accumulator {
    pub count: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Accumulator {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Arithmetic mean, or `None` when nothing was pushed.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::default();
        for value in iter {
            acc.push(value);
        }
        acc
    }
}

/// Group items by key, keeping each group in input order.
///
/// Keys come out in ascending order, which gives every grouped report a
/// stable base order before its own sort.
pub fn group_by<T, K, I, F>(items: I, mut key: F) -> BTreeMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Round to `places` decimals, resolving halves to the even neighbour.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Round to the nearest integer, halves to even.
#[must_use]
pub fn round_to_int(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Decimal places compared when ordering raw figures.
const ORDER_PLACES: i32 = 9;

/// Descending order for unrounded figures.
///
/// Values that agree to nine decimals compare equal, so binary noise
/// between equal means falls through to the caller's tie-break.
pub fn desc(a: f64, b: f64) -> Ordering {
    round_to(b, ORDER_PLACES).total_cmp(&round_to(a, ORDER_PLACES))
}
