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

//! Overlap of per-slice hot sets in a stream of identifiers.
//!
//! Given a long sequence of integer identifiers, such as the chunk fingerprints of a
//! deduplication pipeline, this crate answers: if only the `K` most frequent identifiers of each
//! contiguous slice were kept, how many of them are kept by every slice, and how much of each
//! slice's volume do they cover?
//!
//! The pipeline is built from small pieces that can be used on their own:
//!
//! - [`normalize`](normalize::normalize) quantizes raw values into bucket identifiers.
//! - [`FrequencyTable`](frequencies::FrequencyTable) counts identifiers exactly, and
//!   [`rank_and_trim`](frequencies::FrequencyTable::rank_and_trim) keeps the top entries within a
//!   budget.
//! - [`partition`](partition::partition) splits the sequence into equal-sized slices.
//! - [`accumulate`](intersection::accumulate) narrows the set of identifiers hot in every slice.
//! - [`analyze`](analysis::analyze) runs all of the above and returns plain report records.
//!
//! # Examples
//!
//! ```
//! # use hotoverlap::analysis::OverlapConfig;
//! # use hotoverlap::analysis::analyze;
//! let config = OverlapConfig::builder()
//!     .granularity(1)
//!     .slice_count(2)
//!     .entry_budget(5)
//!     .build()
//!     .unwrap();
//! let report = analyze(&[5, 5, 5, 5], &config).unwrap();
//! assert_eq!(report.surviving_count(), 1);
//! assert_eq!(report.overlap_percent(), 100.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analysis;
pub mod error;
pub mod frequencies;
pub mod input;
pub mod intersection;
pub mod normalize;
pub mod partition;
