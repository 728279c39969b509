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

//! Reports how much the per-slice hot sets of an integer stream overlap.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hotoverlap::analysis::DEFAULT_ENTRY_BUDGET;
use hotoverlap::analysis::DEFAULT_GRANULARITY;
use hotoverlap::analysis::DEFAULT_SAMPLE_SIZE;
use hotoverlap::analysis::DEFAULT_SLICE_COUNT;
use hotoverlap::analysis::OverlapConfig;
use hotoverlap::analysis::OverlapReport;
use hotoverlap::analysis::analyze_parsed;
use hotoverlap::error::Error;
use hotoverlap::input::read_ints_from_path;
use tracing::error;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

#[derive(Debug, Parser)]
#[command(name = "hotoverlap", version, about)]
struct Args {
    /// File of whitespace-separated integers.
    #[arg(short, long, default_value = "rnd/read.txt")]
    input: PathBuf,

    /// Divisor applied to every value before counting.
    #[arg(long, default_value_t = DEFAULT_GRANULARITY)]
    granularity: i64,

    /// Number of contiguous slices.
    #[arg(long, default_value_t = DEFAULT_SLICE_COUNT)]
    slices: usize,

    /// Maximum number of entries kept per slice.
    #[arg(long, default_value_t = DEFAULT_ENTRY_BUDGET)]
    entry_budget: usize,

    /// Number of leading entries printed per report.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let config = OverlapConfig::builder()
        .granularity(args.granularity)
        .slice_count(args.slices)
        .entry_budget(args.entry_budget)
        .sample_size(args.sample_size)
        .build()?;

    let parsed = read_ints_from_path(&args.input)?;

    let report = analyze_parsed(&parsed, &config)?;
    log_report(&report);
    Ok(())
}

fn log_report(report: &OverlapReport) {
    for slice in report.slices() {
        info!("{slice}");
    }
    let dropped = report.dropped_remainder();
    if !dropped.is_empty() {
        info!("{} trailing identifiers outside every slice", dropped.len());
    }
    info!("{report}");
    if report.is_input_truncated() {
        warn!("totals reflect a truncated input");
    }
}
