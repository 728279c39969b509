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

//! Per-slice hot-set analysis and its reports.
//!
//! [`analyze`] normalizes the input, counts the whole sequence once for the number of distinct
//! identifiers, then walks the slices in index order: each slice is counted, ranked and trimmed
//! to the entry budget, and its retained identifiers narrow the running intersection.
//!
//! # Examples
//!
//! ```
//! # use hotoverlap::analysis::OverlapConfig;
//! # use hotoverlap::analysis::analyze;
//! let config = OverlapConfig::builder()
//!     .granularity(1)
//!     .slice_count(2)
//!     .entry_budget(1)
//!     .build()
//!     .unwrap();
//! let report = analyze(&[1, 1, 1, 2, 2, 3], &config).unwrap();
//! assert_eq!(report.slices()[1].covered_count(), 2);
//! assert_eq!(report.surviving_count(), 0);
//! assert_eq!(report.total_distinct(), 3);
//! ```

use std::fmt;
use std::ops::Range;

use tracing::debug;
use tracing::warn;

use crate::error::Error;
use crate::frequencies::FrequencyTable;
use crate::frequencies::RankedEntry;
use crate::frequencies::TrimmedResult;
use crate::input::ParsedInts;
use crate::intersection::SurvivingSet;
use crate::intersection::accumulate;
use crate::normalize::ensure_granularity;
use crate::normalize::normalize;
use crate::partition::Slice;
use crate::partition::partition;

/// Default divisor from raw offsets to block identifiers.
pub const DEFAULT_GRANULARITY: i64 = 64;
/// Default number of slices.
pub const DEFAULT_SLICE_COUNT: usize = 16;
/// Default number of entries kept per slice: `(80 MiB * 8 * 8) / 512`, i.e. 10_485_760.
pub const DEFAULT_ENTRY_BUDGET: usize = (80 << 20) * 8 / 512 * 8;
/// Default number of leading entries reported for inspection.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Validated parameters of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapConfig {
    granularity: i64,
    slice_count: usize,
    entry_budget: usize,
    sample_size: usize,
}

impl OverlapConfig {
    /// Create a new builder for OverlapConfig
    pub fn builder() -> OverlapConfigBuilder {
        OverlapConfigBuilder::default()
    }

    /// Return the normalization divisor
    pub fn granularity(&self) -> i64 {
        self.granularity
    }

    /// Return the number of slices
    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    /// Return the maximum number of entries kept per slice
    pub fn entry_budget(&self) -> usize {
        self.entry_budget
    }

    /// Return the number of leading entries reported
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            granularity: DEFAULT_GRANULARITY,
            slice_count: DEFAULT_SLICE_COUNT,
            entry_budget: DEFAULT_ENTRY_BUDGET,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

/// Builder for OverlapConfig
#[derive(Debug)]
pub struct OverlapConfigBuilder {
    granularity: i64,
    slice_count: usize,
    entry_budget: usize,
    sample_size: usize,
}

impl Default for OverlapConfigBuilder {
    fn default() -> Self {
        let config = OverlapConfig::default();
        Self {
            granularity: config.granularity,
            slice_count: config.slice_count,
            entry_budget: config.entry_budget,
            sample_size: config.sample_size,
        }
    }
}

impl OverlapConfigBuilder {
    /// Set the normalization divisor. Must be positive.
    pub fn granularity(mut self, granularity: i64) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the number of slices. Must be positive.
    pub fn slice_count(mut self, slice_count: usize) -> Self {
        self.slice_count = slice_count;
        self
    }

    /// Set the maximum number of entries kept per slice. Zero keeps nothing.
    pub fn entry_budget(mut self, entry_budget: usize) -> Self {
        self.entry_budget = entry_budget;
        self
    }

    /// Set the number of leading entries reported.
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Build the OverlapConfig.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if the
    /// granularity is not positive or the slice count is zero.
    pub fn build(self) -> Result<OverlapConfig, Error> {
        ensure_granularity(self.granularity)?;
        if self.slice_count == 0 {
            return Err(Error::invalid_argument("slice count must be positive")
                .with_context("slice_count", self.slice_count));
        }
        Ok(OverlapConfig {
            granularity: self.granularity,
            slice_count: self.slice_count,
            entry_budget: self.entry_budget,
            sample_size: self.sample_size,
        })
    }
}

/// Statistics of one slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceReport {
    slice: Slice,
    trimmed: TrimmedResult<i64>,
    sample_size: usize,
}

impl SliceReport {
    /// Returns the zero-based slice position.
    pub fn index(&self) -> usize {
        self.slice.index()
    }

    /// Returns the index range of the slice within the normalized sequence.
    pub fn range(&self) -> Range<usize> {
        self.slice.range()
    }

    /// Returns the number of identifiers in the slice.
    pub fn raw_len(&self) -> usize {
        self.slice.len()
    }

    /// Returns the ranked and trimmed entries of the slice.
    pub fn trimmed(&self) -> &TrimmedResult<i64> {
        &self.trimmed
    }

    /// Returns the number of retained entries.
    pub fn trimmed_count(&self) -> usize {
        self.trimmed.len()
    }

    /// Returns how many identifiers of the slice the retained entries account for.
    pub fn covered_count(&self) -> u64 {
        self.trimmed.covered_count()
    }

    /// Returns [`SliceReport::covered_count`] as a percentage of [`SliceReport::raw_len`].
    ///
    /// An empty slice has a coverage of zero.
    pub fn coverage_percent(&self) -> f64 {
        percent(self.covered_count() as f64, self.raw_len() as f64)
    }

    /// Returns the leading retained entries, capped at the configured sample size.
    pub fn sample(&self) -> &[RankedEntry<i64>] {
        self.trimmed.top(self.sample_size)
    }
}

impl fmt::Display for SliceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slice {}: chunks trimmed count {}, chunks trimmed hit {} of total {}, {:.6}%, \
             chunks trimmed top {} [",
            self.index(),
            self.trimmed_count(),
            self.covered_count(),
            self.raw_len(),
            self.coverage_percent(),
            self.sample().len(),
        )?;
        write_joined(f, self.sample())?;
        f.write_str("]")
    }
}

/// Result of an analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapReport {
    slices: Vec<SliceReport>,
    surviving: SurvivingSet<i64>,
    total_distinct: usize,
    input_len: usize,
    dropped: Range<usize>,
    sample_size: usize,
    input_truncated: bool,
}

impl OverlapReport {
    /// Returns the per-slice statistics in index order.
    pub fn slices(&self) -> &[SliceReport] {
        &self.slices
    }

    /// Returns the identifiers retained by every slice.
    pub fn surviving(&self) -> &SurvivingSet<i64> {
        &self.surviving
    }

    /// Returns the number of identifiers retained by every slice.
    pub fn surviving_count(&self) -> usize {
        self.surviving.len()
    }

    /// Returns the number of distinct identifiers in the whole sequence.
    pub fn total_distinct(&self) -> usize {
        self.total_distinct
    }

    /// Returns [`OverlapReport::surviving_count`] as a percentage of
    /// [`OverlapReport::total_distinct`].
    ///
    /// An input without identifiers has an overlap of zero.
    pub fn overlap_percent(&self) -> f64 {
        percent(self.surviving_count() as f64, self.total_distinct as f64)
    }

    /// Returns the leading surviving identifiers, capped at the configured sample size.
    pub fn surviving_sample(&self) -> &[i64] {
        self.surviving.sample(self.sample_size)
    }

    /// Returns the number of identifiers analyzed, remainder included.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Returns the trailing index range that fell outside every slice.
    pub fn dropped_remainder(&self) -> Range<usize> {
        self.dropped.clone()
    }

    /// Returns true if the input was cut short by a read or parse error.
    pub fn is_input_truncated(&self) -> bool {
        self.input_truncated
    }
}

impl fmt::Display for OverlapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "intersections count {} of total {}, {:.6}%, intersections top {} [",
            self.surviving_count(),
            self.total_distinct,
            self.overlap_percent(),
            self.surviving_sample().len(),
        )?;
        write_joined(f, self.surviving_sample())?;
        f.write_str("]")
    }
}

/// Measures how many of the per-slice hot identifiers of `values` are hot in every slice.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if the
/// configuration is invalid. Configurations produced by [`OverlapConfigBuilder::build`] always
/// are valid.
pub fn analyze(values: &[i64], config: &OverlapConfig) -> Result<OverlapReport, Error> {
    let ids = normalize(values, config.granularity)?;

    let total = FrequencyTable::count(ids.iter().copied());
    debug!(
        input_len = ids.len(),
        total_distinct = total.num_distinct(),
        "counted whole sequence"
    );

    let parts = partition(&ids, config.slice_count)?;
    if !parts.remainder().is_empty() {
        warn!(
            dropped = parts.remainder().len(),
            slice_len = parts.slice_len(),
            "trailing identifiers fall outside every slice"
        );
    }

    let mut slices = Vec::with_capacity(parts.slices().len());
    let mut surviving = None;
    for slice in &parts {
        let table = FrequencyTable::count(slice.of(&ids).iter().copied());
        let trimmed = table.rank_and_trim(config.entry_budget);
        if slice.is_empty() {
            warn!(slice = slice.index(), "slice is empty");
        }
        surviving = Some(accumulate(surviving, trimmed.ids()));

        let report = SliceReport {
            slice: *slice,
            trimmed,
            sample_size: config.sample_size,
        };
        debug!(
            slice = report.index(),
            trimmed = report.trimmed_count(),
            covered = report.covered_count(),
            surviving = surviving.as_ref().map_or(0, SurvivingSet::len),
            "processed slice"
        );
        slices.push(report);
    }

    Ok(OverlapReport {
        slices,
        surviving: surviving.unwrap_or_default(),
        total_distinct: total.num_distinct(),
        input_len: ids.len(),
        dropped: parts.remainder(),
        sample_size: config.sample_size,
        input_truncated: false,
    })
}

/// Same as [`analyze`], for integers that may have been cut short by a read error.
///
/// The analysis covers the integers that were read; the report records whether the input was
/// truncated.
pub fn analyze_parsed(
    parsed: &ParsedInts,
    config: &OverlapConfig,
) -> Result<OverlapReport, Error> {
    if let Some(err) = parsed.error() {
        warn!(
            values_read = parsed.values().len(),
            "analyzing truncated input: {err}"
        );
    }
    let mut report = analyze(parsed.values(), config)?;
    report.input_truncated = parsed.is_truncated();
    Ok(report)
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
