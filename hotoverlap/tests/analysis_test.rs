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

use googletest::prelude::*;
use hotoverlap::analysis::OverlapConfig;
use hotoverlap::analysis::analyze;
use hotoverlap::analysis::analyze_parsed;
use hotoverlap::error::ErrorKind;
use hotoverlap::frequencies::RankedEntry;
use hotoverlap::input::read_ints;

fn config(granularity: i64, slice_count: usize, entry_budget: usize) -> OverlapConfig {
    OverlapConfig::builder()
        .granularity(granularity)
        .slice_count(slice_count)
        .entry_budget(entry_budget)
        .build()
        .unwrap()
}

#[test]
fn test_disjoint_top_entries() {
    let report = analyze(&[1, 1, 1, 2, 2, 3], &config(1, 2, 1)).unwrap();

    let first = &report.slices()[0];
    assert_eq!(first.sample(), &[RankedEntry::new(1, 3)]);
    assert_that!(first.coverage_percent(), near(100.0, 1e-9));

    let second = &report.slices()[1];
    assert_eq!(second.sample(), &[RankedEntry::new(2, 2)]);
    assert_that!(second.covered_count(), eq(2u64));
    assert_that!(second.coverage_percent(), near(66.667, 1e-3));

    assert_that!(report.surviving_count(), eq(0usize));
    assert_that!(report.total_distinct(), eq(3usize));
    assert_that!(report.overlap_percent(), eq(0.0));
}

#[test]
fn test_identical_slices() {
    let report = analyze(&[5, 5, 5, 5], &config(1, 2, 5)).unwrap();
    for slice in report.slices() {
        assert_eq!(slice.sample(), &[RankedEntry::new(5, 2)]);
        assert_that!(slice.coverage_percent(), near(100.0, 1e-9));
    }
    assert_eq!(report.surviving().as_slice(), &[5]);
    assert_that!(report.total_distinct(), eq(1usize));
    assert_that!(report.overlap_percent(), near(100.0, 1e-9));
}

#[test]
fn test_report_rendering() {
    let report = analyze(&[1, 1, 1, 2, 2, 3], &config(1, 2, 1)).unwrap();
    insta::assert_snapshot!(
        report.slices()[0].to_string(),
        @"slice 0: chunks trimmed count 1, chunks trimmed hit 3 of total 3, 100.000000%, chunks trimmed top 1 [(1, 3)]"
    );
    insta::assert_snapshot!(
        report.slices()[1].to_string(),
        @"slice 1: chunks trimmed count 1, chunks trimmed hit 2 of total 3, 66.666667%, chunks trimmed top 1 [(2, 2)]"
    );
    insta::assert_snapshot!(
        report.to_string(),
        @"intersections count 0 of total 3, 0.000000%, intersections top 0 []"
    );

    let report = analyze(&[7, 8, 7, 8, 9, 7, 8, 7], &config(1, 2, 2)).unwrap();
    insta::assert_snapshot!(
        report.to_string(),
        @"intersections count 2 of total 3, 66.666667%, intersections top 2 [7, 8]"
    );
}

#[test]
fn test_coverage_grows_with_budget() {
    let values: Vec<i64> = (0..6000).map(|i| (i * i + 3 * i) % 211).collect();
    let mut last_coverage = 0.0;
    let mut last_surviving = 0;
    for budget in [0, 1, 4, 16, 64, 211] {
        let report = analyze(&values, &config(1, 4, budget)).unwrap();
        let coverage = report.slices()[0].coverage_percent();
        assert_that!(coverage, ge(last_coverage));
        assert_that!(report.surviving_count(), ge(last_surviving));
        for slice in report.slices() {
            assert_that!(slice.trimmed_count(), le(budget));
        }
        last_coverage = coverage;
        last_surviving = report.surviving_count();
    }
    assert_that!(last_coverage, near(100.0, 1e-9));
}

#[test]
fn test_rerun_is_identical() {
    let values: Vec<i64> = (0..50_000).map(|i| (i * 2_654_435_761_i64) % 100_003).collect();
    let config = config(16, 16, 300);
    let first = analyze(&values, &config).unwrap();
    let second = analyze(&values, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.surviving_sample(), second.surviving_sample());
}

#[test]
fn test_truncated_input_is_analyzed() {
    let parsed = read_ints("64 65 128 129\n192 not-a-number 64".as_bytes());
    assert_that!(parsed.values().len(), eq(5usize));
    assert_eq!(parsed.error().unwrap().kind(), ErrorKind::InvalidData);

    let report = analyze_parsed(&parsed, &config(64, 2, 1)).unwrap();
    assert!(report.is_input_truncated());
    assert_eq!(report.dropped_remainder(), 4..5);
    assert_eq!(report.slices()[0].sample(), &[RankedEntry::new(1, 2)]);
    assert_eq!(report.slices()[1].sample(), &[RankedEntry::new(2, 2)]);
    assert_that!(report.total_distinct(), eq(3usize));
}

#[test]
fn test_invalid_configuration() {
    let err = OverlapConfig::builder().granularity(-64).build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let err = OverlapConfig::builder().slice_count(0).build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
