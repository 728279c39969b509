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

//! Quantization of raw values into bucket identifiers.

use crate::error::Error;

/// Maps every raw value to its bucket identifier by dividing it by `granularity`.
///
/// Division truncates toward zero, so `-65 / 64` yields `-1` and `63 / 64` yields `0`.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) if
/// `granularity` is not positive.
///
/// # Examples
///
/// ```
/// # use hotoverlap::normalize::normalize;
/// let buckets = normalize(&[0, 63, 64, 130, -65], 64).unwrap();
/// assert_eq!(buckets, vec![0, 0, 1, 2, -1]);
/// ```
pub fn normalize(values: &[i64], granularity: i64) -> Result<Vec<i64>, Error> {
    ensure_granularity(granularity)?;
    Ok(values.iter().map(|v| v / granularity).collect())
}

/// Same as [`normalize`], rewriting `values` without allocating.
pub fn normalize_in_place(values: &mut [i64], granularity: i64) -> Result<(), Error> {
    ensure_granularity(granularity)?;
    for v in values.iter_mut() {
        *v /= granularity;
    }
    Ok(())
}

pub(crate) fn ensure_granularity(granularity: i64) -> Result<(), Error> {
    if granularity > 0 {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "granularity must be positive; got {granularity}"
        ))
        .with_context("granularity", granularity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_identity_granularity() {
        let values = [1, 1, 1, 2, 2, 3];
        assert_eq!(normalize(&values, 1).unwrap(), values.to_vec());
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(
            normalize(&[-1, -63, -64, -127, 127, i64::MIN], 64).unwrap(),
            vec![0, 0, -1, -1, 1, i64::MIN / 64]
        );
    }

    #[test]
    fn test_preserves_length() {
        let values: Vec<i64> = (0..1000).map(|i| i * 37 - 5000).collect();
        for granularity in [1, 2, 7, 64, 4096] {
            assert_eq!(normalize(&values, granularity).unwrap().len(), values.len());
        }
    }

    #[test]
    fn test_in_place_matches_copy() {
        let values: Vec<i64> = (-200..200).collect();
        let mut in_place = values.clone();
        normalize_in_place(&mut in_place, 9).unwrap();
        assert_eq!(in_place, normalize(&values, 9).unwrap());
    }

    #[test]
    fn test_rejects_non_positive_granularity() {
        for granularity in [0, -1, i64::MIN] {
            let err = normalize(&[1, 2, 3], granularity).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        let mut values = [1, 2, 3];
        assert!(normalize_in_place(&mut values, 0).is_err());
        assert_eq!(values, [1, 2, 3]);
    }
}
