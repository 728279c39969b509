// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Error;

/// Exact occurrence counts of the distinct identifiers of a sequence.
///
/// Every stored count is strictly positive, and [`FrequencyTable::total_count`] is the sum of all
/// counts.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    counts: HashMap<T, u64>,
    total: u64,
}

impl<T: Eq + Hash> FrequencyTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Counts the occurrences of every value in `values`.
    ///
    /// An empty input yields an empty table.
    pub fn count<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values = values.into_iter();
        let mut table = Self {
            counts: HashMap::with_capacity(values.size_hint().0),
            total: 0,
        };
        for value in values {
            table.add(value, 1);
        }
        table
    }

    /// Builds a table from externally supplied `(identifier, count)` pairs.
    ///
    /// Pairs that repeat an identifier are summed. Zero counts are skipped so that every stored
    /// count stays positive.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if any
    /// count is negative or the counts sum past `u64::MAX`.
    pub fn try_from_counts<I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        let mut table = Self::new();
        for (position, (id, count)) in pairs.into_iter().enumerate() {
            if count < 0 {
                return Err(Error::invalid_argument(format!(
                    "frequency counts must not be negative; got {count}"
                ))
                .with_context("position", position));
            }
            if count == 0 {
                continue;
            }
            let Some(total) = table.total.checked_add(count as u64) else {
                return Err(Error::invalid_argument(format!(
                    "frequency counts overflow the total; adding {count} to {}",
                    table.total
                ))
                .with_context("position", position));
            };
            *table.counts.entry(id).or_insert(0) += count as u64;
            table.total = total;
        }
        Ok(table)
    }

    /// Returns the count of `id`, or zero if it never occurred.
    pub fn get(&self, id: &T) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Returns the number of distinct identifiers.
    pub fn num_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the sum of all counts, which is the length of the counted sequence.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Returns true if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(identifier, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.counts.iter().map(|(id, count)| (id, *count))
    }

    fn add(&mut self, id: T, count: u64) {
        *self.counts.entry(id).or_insert(0) += count;
        self.total += count;
    }
}

impl<T: Eq + Hash> PartialEq for FrequencyTable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for FrequencyTable<T> {}

impl<T: Eq + Hash> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::count(iter)
    }
}

/// Counts the occurrences of every identifier in `values`.
pub fn count<T: Copy + Eq + Hash>(values: &[T]) -> FrequencyTable<T> {
    FrequencyTable::count(values.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_count_empty() {
        let table = count::<i64>(&[]);
        assert!(table.is_empty());
        assert_eq!(table.num_distinct(), 0);
        assert_eq!(table.total_count(), 0);
    }

    #[test]
    fn test_count_basic() {
        let table = count(&[1, 1, 1, 2, 2, 3]);
        assert_eq!(table.get(&1), 3);
        assert_eq!(table.get(&2), 2);
        assert_eq!(table.get(&3), 1);
        assert_eq!(table.get(&4), 0);
        assert_eq!(table.num_distinct(), 3);
        assert_eq!(table.total_count(), 6);
    }

    #[test]
    fn test_counts_sum_to_length() {
        let values: Vec<i64> = (0..5000).map(|i| (i * i) % 97).collect();
        let table = count(&values);
        let sum: u64 = table.iter().map(|(_, c)| c).sum();
        assert_eq!(sum, values.len() as u64);
        assert_eq!(table.total_count(), values.len() as u64);
        assert!(table.num_distinct() <= values.len());
    }

    #[test]
    fn test_collect() {
        let table: FrequencyTable<&str> = ["a", "b", "a"].into_iter().collect();
        assert_eq!(table.get(&"a"), 2);
        assert_eq!(table.get(&"b"), 1);
    }

    #[test]
    fn test_try_from_counts() {
        let table = FrequencyTable::try_from_counts([(7, 2), (9, 0), (7, 3), (1, 1)]).unwrap();
        assert_eq!(table.get(&7), 5);
        assert_eq!(table.get(&9), 0);
        assert_eq!(table.num_distinct(), 2);
        assert_eq!(table.total_count(), 6);
    }

    #[test]
    fn test_try_from_counts_rejects_overflow() {
        let err =
            FrequencyTable::try_from_counts([(1i64, i64::MAX), (2, i64::MAX), (3, i64::MAX)])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context_value("position"), Some("2"));

        let table = FrequencyTable::try_from_counts([(1i64, i64::MAX), (2, i64::MAX)]).unwrap();
        assert_eq!(table.total_count(), 2 * i64::MAX as u64);
        assert_eq!(table.rank_and_trim(2).covered_count(), table.total_count());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let counted = count(&[3, 1, 3, 2, 3]);
        let supplied = FrequencyTable::try_from_counts([(2, 1), (3, 3), (1, 1)]).unwrap();
        assert_eq!(counted, supplied);
        assert_ne!(counted, count(&[3, 1, 3, 2]));
    }

    #[test]
    fn test_try_from_counts_rejects_negative() {
        let err = FrequencyTable::try_from_counts([(1, 4), (2, -1)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.context_value("position"), Some("1"));
    }
}
