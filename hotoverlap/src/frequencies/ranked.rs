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

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::frequencies::FrequencyTable;

/// An identifier together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankedEntry<T> {
    id: T,
    count: u64,
}

impl<T> RankedEntry<T> {
    /// Creates a new entry.
    pub fn new(id: T, count: u64) -> Self {
        Self { id, count }
    }

    /// Returns the identifier.
    pub fn id(&self) -> &T {
        &self.id
    }

    /// Returns the occurrence count.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<T: fmt::Display> fmt::Display for RankedEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.count)
    }
}

/// The highest ranked entries of a [`FrequencyTable`], cut to a budget.
///
/// Entries are sorted by count descending, then identifier ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedResult<T> {
    entries: Vec<RankedEntry<T>>,
    covered_count: u64,
}

impl<T> TrimmedResult<T> {
    /// Returns the retained entries in rank order.
    pub fn entries(&self) -> &[RankedEntry<T>] {
        &self.entries
    }

    /// Returns at most `n` leading entries.
    pub fn top(&self, n: usize) -> &[RankedEntry<T>] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Returns the number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry was retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of the counts of the retained entries.
    pub fn covered_count(&self) -> u64 {
        self.covered_count
    }

    /// Iterates over the retained identifiers in rank order.
    pub fn ids(&self) -> impl Iterator<Item = T> + '_
    where
        T: Copy,
    {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Returns the retained identifiers as a set.
    pub fn key_set(&self) -> HashSet<T>
    where
        T: Copy + Eq + Hash,
    {
        self.ids().collect()
    }
}

impl<T: Copy + Ord + Hash> FrequencyTable<T> {
    /// Ranks the table by descending count and keeps at most `budget` entries.
    ///
    /// A budget of zero yields an empty result. A budget at least as large as the table keeps
    /// every entry, in which case the covered count equals [`FrequencyTable::total_count`].
    pub fn rank_and_trim(&self, budget: usize) -> TrimmedResult<T> {
        let keep = budget.min(self.num_distinct());
        if keep == 0 {
            return TrimmedResult {
                entries: Vec::new(),
                covered_count: 0,
            };
        }

        let mut entries: Vec<RankedEntry<T>> = self
            .iter()
            .map(|(id, count)| RankedEntry::new(*id, count))
            .collect();
        if keep < entries.len() {
            // partition the best `keep` entries to the front before sorting only those
            entries.select_nth_unstable_by(keep - 1, rank_order);
            entries.truncate(keep);
        }
        entries.sort_unstable_by(rank_order);

        let covered_count = entries.iter().map(|entry| entry.count).sum();
        TrimmedResult {
            entries,
            covered_count,
        }
    }
}

/// Ranks `table` by descending count and keeps at most `budget` entries.
///
/// See [`FrequencyTable::rank_and_trim`].
pub fn rank_and_trim<T: Copy + Ord + Hash>(
    table: &FrequencyTable<T>,
    budget: usize,
) -> TrimmedResult<T> {
    table.rank_and_trim(budget)
}

fn rank_order<T: Ord>(a: &RankedEntry<T>, b: &RankedEntry<T>) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequencies::count;

    fn pairs(trimmed: &TrimmedResult<i64>) -> Vec<(i64, u64)> {
        trimmed
            .entries()
            .iter()
            .map(|entry| (*entry.id(), entry.count()))
            .collect()
    }

    #[test]
    fn test_empty_table() {
        let trimmed = count::<i64>(&[]).rank_and_trim(10);
        assert!(trimmed.is_empty());
        assert_eq!(trimmed.covered_count(), 0);
    }

    #[test]
    fn test_zero_budget() {
        let trimmed = count(&[1, 1, 2]).rank_and_trim(0);
        assert!(trimmed.is_empty());
        assert_eq!(trimmed.covered_count(), 0);
    }

    #[test]
    fn test_budget_larger_than_table() {
        let table = count(&[4, 4, 9, 1, 9, 9]);
        let trimmed = table.rank_and_trim(100);
        assert_eq!(pairs(&trimmed), vec![(9, 3), (4, 2), (1, 1)]);
        assert_eq!(trimmed.covered_count(), table.total_count());
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let table = count(&[30, 10, 20, 20, 10, 30, 5]);
        let trimmed = table.rank_and_trim(3);
        assert_eq!(pairs(&trimmed), vec![(10, 2), (20, 2), (30, 2)]);

        let trimmed = table.rank_and_trim(2);
        assert_eq!(pairs(&trimmed), vec![(10, 2), (20, 2)]);
        assert_eq!(trimmed.covered_count(), 4);
    }

    #[test]
    fn test_negative_ids_rank_before_positive_on_tie() {
        let trimmed = count(&[3, -3, 0]).rank_and_trim(2);
        assert_eq!(pairs(&trimmed), vec![(-3, 1), (0, 1)]);
    }

    #[test]
    fn test_counts_non_increasing() {
        let values: Vec<i64> = (0..10_000).map(|i| (i * 7919) % 613 % 41).collect();
        let table = count(&values);
        for budget in [1, 5, 17, 40, 41, 1000] {
            let trimmed = table.rank_and_trim(budget);
            assert_eq!(trimmed.len(), budget.min(table.num_distinct()));
            for pair in trimmed.entries().windows(2) {
                assert!(pair[0].count() >= pair[1].count());
                if pair[0].count() == pair[1].count() {
                    assert!(pair[0].id() < pair[1].id());
                }
            }
        }
    }

    #[test]
    fn test_trimmed_prefix_matches_full_ranking() {
        let values: Vec<i64> = (0..2000).map(|i| (i * 31) % 97 % 23).collect();
        let table = count(&values);
        let full = table.rank_and_trim(usize::MAX);
        for budget in 0..=table.num_distinct() {
            let trimmed = table.rank_and_trim(budget);
            assert_eq!(trimmed.entries(), full.top(budget));
            let covered: u64 = full.top(budget).iter().map(|e| e.count()).sum();
            assert_eq!(trimmed.covered_count(), covered);
        }
    }

    #[test]
    fn test_key_set_and_display() {
        let trimmed = count(&[1, 1, 2]).rank_and_trim(5);
        assert_eq!(trimmed.key_set(), HashSet::from([1, 2]));
        assert_eq!(trimmed.entries()[0].to_string(), "(1, 2)");
    }
}
