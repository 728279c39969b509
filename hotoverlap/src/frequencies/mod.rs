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

//! Exact frequency counting and budgeted top-K ranking.
//!
//! # Overview
//!
//! A [`FrequencyTable`] maps every distinct identifier of a sequence to the number of times it
//! occurs. Unlike a sketch, the table is exact: the sum of its counts always equals the length of
//! the counted sequence.
//!
//! [`FrequencyTable::rank_and_trim`] orders the table by descending count and keeps at most
//! `budget` entries, returning a [`TrimmedResult`] that also reports how much of the counted
//! volume the retained entries cover.
//!
//! # Ranking order
//!
//! Entries are ordered by count, highest first. Entries with equal counts are ordered by
//! identifier, lowest first. The order is total, so the same table always ranks the same way.
//!
//! # Examples
//!
//! ```
//! # use hotoverlap::frequencies::FrequencyTable;
//! let table = FrequencyTable::count([2, 3, 2, 7, 3, 2]);
//! assert_eq!(table.get(&2), 3);
//! assert_eq!(table.total_count(), 6);
//!
//! let trimmed = table.rank_and_trim(2);
//! let ids: Vec<i64> = trimmed.ids().collect();
//! assert_eq!(ids, vec![2, 3]);
//! assert_eq!(trimmed.covered_count(), 5);
//! ```

mod ranked;
mod table;

pub use self::ranked::RankedEntry;
pub use self::ranked::TrimmedResult;
pub use self::ranked::rank_and_trim;
pub use self::table::FrequencyTable;
pub use self::table::count;
