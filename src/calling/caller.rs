// Copyright 2020 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str;

use anyhow::{Context, Result};
use derive_builder::Builder;
use itertools::Itertools;
use progress_logger::ProgressLogger;
use rust_htslib::bam::{self, Read};

use crate::breakpoints::BreakpointInfo;
use crate::calling::classify::classify;
use crate::calling::output::SvWriter;
use crate::calling::record::{SvRecord, SvType};
use crate::calling::Alignment;

/// Counts of what happened to the processed alignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, CopyGetters)]
pub struct CallStats {
    #[getset(get_copy = "pub")]
    alignments: usize,
    /// Fragments mapping back onto their own breakpoint.
    #[getset(get_copy = "pub")]
    filtered: usize,
    /// Fragments that could not be interpreted, e.g. because their name does
    /// not encode a breakpoint or their reference name is malformed.
    #[getset(get_copy = "pub")]
    skipped: usize,
    #[getset(get = "pub")]
    calls: BTreeMap<SvType, usize>,
}

impl CallStats {
    pub fn n_calls(&self) -> usize {
        self.calls.values().sum()
    }
}

/// Decode and classify a single record. Errors concern this record only.
fn call_record(record: &bam::Record, header: &bam::HeaderView) -> Result<Option<SvRecord>> {
    let qname = str::from_utf8(record.qname()).context("read name is not valid UTF-8")?;
    let origin = BreakpointInfo::decode(qname)?;
    let alignment = Alignment::from_record(record, header)?;
    classify(&alignment, &origin)
}

/// Calls structural variants from an alignment file of realigned clipped fragments.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct Caller {
    /// SAM/BAM/CRAM file with realigned fragments.
    #[builder(setter(into))]
    alignments: PathBuf,
    /// Output file for calls (STDOUT if omitted).
    #[builder(default, setter(into))]
    output: Option<PathBuf>,
}

impl Caller {
    fn writer(&self) -> Result<SvWriter> {
        Ok(if let Some(ref path) = self.output {
            SvWriter::from_path(path)?
        } else {
            SvWriter::from_stdout()
        })
    }

    pub fn call(&self) -> Result<CallStats> {
        let mut reader = bam::Reader::from_path(&self.alignments).with_context(|| {
            format!(
                "Unable to read alignments from {}.",
                self.alignments.display()
            )
        })?;
        let header = reader.header().clone();
        let mut writer = self.writer()?;
        let mut stats = CallStats::default();

        let mut progress_logger = ProgressLogger::builder()
            .with_items_name("alignments")
            .with_frequency(std::time::Duration::from_secs(20))
            .start();

        for record in reader.records() {
            let record = record.context("Unable to read alignment record.")?;
            stats.alignments += 1;
            progress_logger.update(1u64);

            match call_record(&record, &header) {
                Ok(Some(call)) => {
                    *stats.calls.entry(call.svtype()).or_insert(0) += 1;
                    writer.write(&call)?;
                }
                Ok(None) => stats.filtered += 1,
                Err(e) => {
                    warn!("{:#}, skipping", e);
                    stats.skipped += 1;
                }
            }
        }
        writer.flush()?;
        progress_logger.stop();

        info!(
            "Processed {} alignments: {} calls ({}), {} filtered, {} skipped.",
            stats.alignments,
            stats.n_calls(),
            stats
                .calls
                .iter()
                .map(|(svtype, count)| format!("{}={}", svtype, count))
                .join(", "),
            stats.filtered,
            stats.skipped,
        );

        Ok(stats)
    }
}
