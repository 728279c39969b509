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

//! Reading whitespace-separated integers.
//!
//! Reading stops at the first token that is not a signed 64-bit integer. The values read before
//! that point are kept, and the error travels alongside them so callers can report that the input
//! was cut short without discarding what was parsed.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;

/// Integers read from a token stream, plus the error that stopped reading early, if any.
#[derive(Debug)]
pub struct ParsedInts {
    values: Vec<i64>,
    error: Option<Error>,
}

impl ParsedInts {
    /// Returns the integers read before reading stopped.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Consumes self and returns the integers read.
    pub fn into_values(self) -> Vec<i64> {
        self.values
    }

    /// Returns the error that stopped reading, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns true if reading stopped before the end of the input.
    pub fn is_truncated(&self) -> bool {
        self.error.is_some()
    }
}

/// Reads whitespace-separated integers from `reader`.
///
/// A malformed token yields an [`ErrorKind::InvalidData`] error and an I/O failure an
/// [`ErrorKind::Unexpected`] one; in both cases the integers read so far are returned.
///
/// [`ErrorKind::InvalidData`]: crate::error::ErrorKind::InvalidData
/// [`ErrorKind::Unexpected`]: crate::error::ErrorKind::Unexpected
///
/// # Examples
///
/// ```
/// # use hotoverlap::input::read_ints;
/// let parsed = read_ints("10 20\n30 x 40".as_bytes());
/// assert_eq!(parsed.values(), &[10, 20, 30]);
/// assert!(parsed.is_truncated());
/// ```
pub fn read_ints<R: BufRead>(mut reader: R) -> ParsedInts {
    let mut values = Vec::new();
    let mut line = String::new();
    let mut line_no = 0usize;
    loop {
        line.clear();
        line_no += 1;
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                let error = Error::unexpected("failed to read integer stream")
                    .with_context("line", line_no)
                    .set_source(err);
                return ParsedInts {
                    values,
                    error: Some(error),
                };
            }
        }
        for token in line.split_whitespace() {
            match token.parse::<i64>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    let error = Error::invalid_data(format!("malformed integer token {token:?}"))
                        .with_context("line", line_no)
                        .with_context("values_read", values.len())
                        .set_source(err);
                    return ParsedInts {
                        values,
                        error: Some(error),
                    };
                }
            }
        }
    }
    ParsedInts {
        values,
        error: None,
    }
}

/// Opens `path` and reads whitespace-separated integers from it.
///
/// # Errors
///
/// Returns [`ErrorKind::Unexpected`](crate::error::ErrorKind::Unexpected) if the file cannot be
/// opened. Errors met while reading are recorded in the returned [`ParsedInts`] instead.
pub fn read_ints_from_path(path: impl AsRef<Path>) -> Result<ParsedInts, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        Error::unexpected("failed to open input")
            .with_context("path", path.display())
            .set_source(err)
    })?;
    Ok(read_ints(BufReader::new(file)))
}
