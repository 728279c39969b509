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

//! Splitting a sequence into contiguous, equal-sized slices.
//!
//! The slice length is `len / slice_count`, rounded down. The trailing `len % slice_count`
//! elements belong to no slice.

use std::ops::Range;

use crate::error::Error;

/// A half-open index range `[start, end)` of a partitioned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    index: usize,
    start: usize,
    end: usize,
}

impl Slice {
    /// Returns the zero-based position of this slice.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the first index covered by this slice.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the index one past the last covered index.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the covered index range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of covered elements.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the slice covers no element.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the elements of `values` covered by this slice.
    ///
    /// # Panics
    ///
    /// Panics if `values` is shorter than [`Slice::end`].
    pub fn of<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        &values[self.range()]
    }
}

/// The slices of a sequence of a known length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    slices: Vec<Slice>,
    slice_len: usize,
    input_len: usize,
}

impl Partition {
    /// Returns the slices in index order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Returns the length shared by every slice.
    pub fn slice_len(&self) -> usize {
        self.slice_len
    }

    /// Returns the number of elements covered by all slices together.
    pub fn covered_len(&self) -> usize {
        self.slice_len * self.slices.len()
    }

    /// Returns the trailing index range that no slice covers.
    pub fn remainder(&self) -> Range<usize> {
        self.covered_len()..self.input_len
    }

    /// Iterates over the slices in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }
}

impl IntoIterator for Partition {
    type Item = Slice;
    type IntoIter = std::vec::IntoIter<Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

/// Splits `values` into `slice_count` contiguous slices of `values.len() / slice_count` elements.
///
/// When there are fewer values than slices, every slice is empty.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if
/// `slice_count` is zero.
///
/// # Examples
///
/// ```
/// # use hotoverlap::partition::partition;
/// let values = [1, 1, 1, 2, 2, 3, 9];
/// let parts = partition(&values, 2).unwrap();
/// assert_eq!(parts.slices()[0].of(&values), &[1, 1, 1]);
/// assert_eq!(parts.slices()[1].of(&values), &[2, 2, 3]);
/// assert_eq!(parts.remainder(), 6..7);
/// ```
pub fn partition<T>(values: &[T], slice_count: usize) -> Result<Partition, Error> {
    partition_len(values.len(), slice_count)
}

/// Same as [`partition`], for a sequence of length `len`.
pub fn partition_len(len: usize, slice_count: usize) -> Result<Partition, Error> {
    if slice_count == 0 {
        return Err(Error::invalid_argument("slice count must be positive")
            .with_context("slice_count", slice_count));
    }
    let slice_len = len / slice_count;
    let slices = (0..slice_count)
        .map(|index| Slice {
            index,
            start: slice_len * index,
            end: slice_len * (index + 1),
        })
        .collect();
    Ok(Partition {
        slices,
        slice_len,
        input_len: len,
    })
}
