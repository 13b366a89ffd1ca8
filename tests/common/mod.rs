use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use itertools::Itertools;
use serde_json::Value;
use tempfile::{self, TempDir};

use clipsv::calling::caller::CallStats;
use clipsv::calling::CallerBuilder;

const SEQUENCES: &[(&str, u64)] = &[
    ("chr1", 100_000),
    ("chr2", 100_000),
    ("chrX", 100_000),
    ("chr1:50000-60000", 10_000),
];

/// A SAM record of a realigned fragment.
pub(crate) struct Fragment {
    pub(crate) qname: String,
    pub(crate) flag: u16,
    pub(crate) rname: &'static str,
    pub(crate) pos: u64,
    pub(crate) len: usize,
}

impl Fragment {
    pub(crate) fn mapped(qname: &str, rname: &'static str, pos: u64, reversed: bool) -> Self {
        Fragment {
            qname: qname.to_owned(),
            flag: if reversed { 16 } else { 0 },
            rname,
            pos,
            len: 50,
        }
    }

    pub(crate) fn unmapped(qname: &str) -> Self {
        Fragment {
            qname: qname.to_owned(),
            flag: 4,
            rname: "*",
            pos: 0,
            len: 50,
        }
    }

    fn to_sam(&self) -> String {
        let unmapped = self.flag & 4 != 0;
        [
            self.qname.clone(),
            self.flag.to_string(),
            self.rname.to_owned(),
            self.pos.to_string(),
            if unmapped { "0" } else { "60" }.to_owned(),
            if unmapped {
                "*".to_owned()
            } else {
                format!("{}M", self.len)
            },
            "*".to_owned(),
            "0".to_owned(),
            "0".to_owned(),
            "A".repeat(self.len),
            "*".to_owned(),
        ]
        .join("\t")
    }
}

/// Runs the caller on a SAM file made up of the given fragments.
pub(crate) struct Testcase {
    tmp: TempDir,
    fragments: Vec<Fragment>,
    extra_sequences: Vec<(&'static str, u64)>,
}

impl Testcase {
    pub(crate) fn new(fragments: Vec<Fragment>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Testcase {
            tmp: tempfile::tempdir().unwrap(),
            fragments,
            extra_sequences: Vec::new(),
        }
    }

    /// Declare an additional reference sequence in the SAM header.
    pub(crate) fn with_sequence(mut self, name: &'static str, len: u64) -> Self {
        self.extra_sequences.push((name, len));
        self
    }

    fn sam_path(&self) -> PathBuf {
        self.tmp.path().join("fragments.sam")
    }

    fn output_path(&self) -> PathBuf {
        self.tmp.path().join("calls.txt")
    }

    fn write_sam(&self) -> Result<()> {
        let mut sam = File::create(self.sam_path())?;
        writeln!(sam, "@HD\tVN:1.6\tSO:unsorted")?;
        for (name, len) in SEQUENCES.iter().chain(&self.extra_sequences) {
            writeln!(sam, "@SQ\tSN:{}\tLN:{}", name, len)?;
        }
        for fragment in &self.fragments {
            writeln!(sam, "{}", fragment.to_sam())?;
        }
        Ok(())
    }

    pub(crate) fn run(&self) -> Result<CallStats> {
        self.write_sam()?;
        CallerBuilder::default()
            .alignments(self.sam_path())
            .output(self.output_path())
            .build()?
            .call()
    }

    /// Output lines, split into sort key and parsed call.
    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        fs::read_to_string(self.output_path())
            .unwrap()
            .lines()
            .map(|line| {
                let (key, json) = line.splitn(2, '\t').collect_tuple().unwrap();
                (key.to_owned(), serde_json::from_str(json).unwrap())
            })
            .collect()
    }
}
