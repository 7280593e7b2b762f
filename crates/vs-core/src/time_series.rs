//! Ordered, key-indexed time series.
//!
//! `TimeSeries<K, V>` maps ordered keys (typically `chrono::NaiveDate`) to
//! values. Realized fixings of an underlying are passed around as
//! `TimeSeries<NaiveDate, f64>`; an explicit empty series stands for "no
//! observations yet".

use std::collections::BTreeMap;
use std::ops::Bound;

/// A key-ordered container backed by a `BTreeMap`.
///
/// Keys are unique; inserting an existing key overwrites its value.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<K: Ord + Clone, V: Clone> {
    data: BTreeMap<K, V>,
}

impl<K: Ord + Clone, V: Clone> Default for TimeSeries<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V: Clone> FromIterator<(K, V)> for TimeSeries<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> TimeSeries<K, V> {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Create an empty time series.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.data.get(key)
    }

    /// Insert or overwrite a value.
    pub fn insert(&mut self, key: K, value: V) {
        self.data.insert(key, value);
    }

    // ── Slicing ──────────────────────────────────────────────────────────

    /// Extract the entries whose keys lie between `from` and `to`.
    ///
    /// Each bound is inclusive or exclusive according to its flag. An
    /// inverted or degenerate range yields an empty series rather than an
    /// error.
    pub fn sub_series(&self, from: &K, include_from: bool, to: &K, include_to: bool) -> Self {
        if from > to || (from == to && !(include_from && include_to)) {
            return Self::new();
        }
        let lower = if include_from {
            Bound::Included(from)
        } else {
            Bound::Excluded(from)
        };
        let upper = if include_to {
            Bound::Included(to)
        } else {
            Bound::Excluded(to)
        };
        self.data
            .range::<K, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // ── Bulk access ──────────────────────────────────────────────────────

    /// All values in key-ascending order.
    pub fn values(&self) -> Vec<V> {
        self.data.values().cloned().collect()
    }

    /// Iterate over `(&K, &V)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.data.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> TimeSeries<i32, f64> {
        [(5, 50.0), (1, 10.0), (3, 30.0), (4, 40.0), (2, 20.0)]
            .into_iter()
            .collect()
    }

    fn keys<V: Clone>(ts: &TimeSeries<i32, V>) -> Vec<i32> {
        ts.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn empty_construction() {
        let ts: TimeSeries<i32, f64> = TimeSeries::new();
        assert!(ts.is_empty());
        assert_eq!(ts.len(), 0);
        assert!(ts.values().is_empty());
    }

    #[test]
    fn values_follow_key_order() {
        let ts = sample();
        assert_eq!(keys(&ts), vec![1, 2, 3, 4, 5]);
        assert_eq!(ts.values(), vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn sub_series_closed_open() {
        let s = sample().sub_series(&2, true, &4, false);
        assert_eq!(keys(&s), vec![2, 3]);
    }

    #[test]
    fn sub_series_open_closed() {
        let s = sample().sub_series(&2, false, &4, true);
        assert_eq!(keys(&s), vec![3, 4]);
    }

    #[test]
    fn sub_series_degenerate_ranges() {
        let ts = sample();
        assert!(ts.sub_series(&3, true, &3, false).is_empty());
        assert_eq!(keys(&ts.sub_series(&3, true, &3, true)), vec![3]);
        assert!(ts.sub_series(&4, true, &2, true).is_empty());
    }

    #[test]
    fn overwrite_existing_key() {
        let mut ts = TimeSeries::new();
        ts.insert(1, 100);
        ts.insert(1, 200);
        assert_eq!(ts.get(&1), Some(&200));
        assert_eq!(ts.len(), 1);
    }

    proptest! {
        #[test]
        fn sub_series_keeps_exactly_the_keys_in_range(
            entries in proptest::collection::btree_map(-50i32..50, any::<i16>(), 0..40),
            from in -60i32..60,
            to in -60i32..60,
            include_from in any::<bool>(),
            include_to in any::<bool>(),
        ) {
            let ts: TimeSeries<i32, i16> = entries.clone().into_iter().collect();
            let s = ts.sub_series(&from, include_from, &to, include_to);
            let in_range = |k: i32| {
                (if include_from { k >= from } else { k > from })
                    && (if include_to { k <= to } else { k < to })
            };
            let expected: Vec<(i32, i16)> =
                entries.into_iter().filter(|(k, _)| in_range(*k)).collect();
            let got: Vec<(i32, i16)> = s.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
