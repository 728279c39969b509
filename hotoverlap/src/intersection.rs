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

//! Running intersection of per-slice identifier sets.
//!
//! The first slice's identifiers become the baseline; every later slice can only remove
//! identifiers from it. The fold is written out explicitly so a single step can be checked in
//! isolation:
//!
//! ```
//! # use hotoverlap::intersection::accumulate;
//! let surviving = accumulate(None, [1, 2, 3]);
//! let surviving = accumulate(Some(surviving), [3, 1, 8]);
//! assert_eq!(surviving.as_slice(), &[1, 3]);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// Identifiers that appeared in every slice processed so far.
///
/// Members keep the order in which the first slice listed them.
#[derive(Debug, Clone)]
pub struct SurvivingSet<T> {
    ids: Vec<T>,
    members: HashSet<T>,
}

impl<T: Copy + Eq + Hash> SurvivingSet<T> {
    /// Creates a set from `ids`, keeping the first occurrence of duplicates.
    pub fn from_ids<I: IntoIterator<Item = T>>(ids: I) -> Self {
        let mut set = Self::default();
        for id in ids {
            if set.members.insert(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Keeps only the members that also occur in `current`.
    pub fn intersect(mut self, current: &HashSet<T>) -> Self {
        self.ids.retain(|id| current.contains(id));
        self.members.retain(|id| current.contains(id));
        self
    }

    /// Returns the number of surviving identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no identifier survived.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns true if `id` survived.
    pub fn contains(&self, id: &T) -> bool {
        self.members.contains(id)
    }

    /// Returns the surviving identifiers in baseline order.
    pub fn as_slice(&self) -> &[T] {
        &self.ids
    }

    /// Returns at most `n` leading identifiers.
    pub fn sample(&self, n: usize) -> &[T] {
        &self.ids[..n.min(self.ids.len())]
    }

    /// Iterates over the surviving identifiers in baseline order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.ids.iter()
    }

    /// Returns the surviving identifiers as an unordered set.
    pub fn to_set(&self) -> HashSet<T> {
        self.members.clone()
    }
}

impl<T> Default for SurvivingSet<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<T: Eq + Hash> PartialEq for SurvivingSet<T> {
    /// Two sets are equal when they hold the same members, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<T: Eq + Hash> Eq for SurvivingSet<T> {}

/// Advances the running intersection by one slice.
///
/// With no previous state the result is a copy of `current`. Otherwise it is the members of
/// `surviving` that also appear in `current`.
pub fn accumulate<T, I>(surviving: Option<SurvivingSet<T>>, current: I) -> SurvivingSet<T>
where
    T: Copy + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    match surviving {
        None => SurvivingSet::from_ids(current),
        Some(surviving) => {
            let current: HashSet<T> = current.into_iter().collect();
            surviving.intersect(&current)
        }
    }
}

/// Folds [`accumulate`] over `slices` in iteration order.
///
/// Returns `None` if `slices` is empty.
pub fn intersect_all<T, S, I>(slices: S) -> Option<SurvivingSet<T>>
where
    T: Copy + Eq + Hash,
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
{
    slices
        .into_iter()
        .fold(None, |surviving, current| Some(accumulate(surviving, current)))
}
