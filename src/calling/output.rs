//! output.rs
//!
//! Serialization of calls into sortable lines.
//!
//! Each line consists of a sort key, a tab and the JSON representation of
//! the call. The sort key concatenates zero-padded renderings of
//!
//! 1. chromosome code,
//! 2. code of the second chromosome (same as 1. unless translocation),
//! 3. start,
//! 4. length,
//! 5. LR,
//! 6. type,
//!
//! such that a plain lexicographic sort of the lines (e.g. `sort`) groups
//! calls by locus. Two limitations apply to the textual key:
//!
//! * values wider than their padding are not truncated and then only sort
//!   correctly among values of the same width,
//! * all unplaced contigs share rank 0 (`000`), so calls on different
//!   unplaced contigs interleave.
//!
//! In-process consumers should order by [`SvRecord::sort_key`] instead,
//! which has neither limitation.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::calling::record::SvRecord;

pub const CODE_ORDER: usize = 2;
pub const START_ORDER: usize = 10;
pub const LEN_ORDER: usize = 9;

/// Prepend zeros to the textual representation of `value` until it has
/// `order + 1` characters.
pub fn pad<T: Display>(value: T, order: usize) -> String {
    format!("{:0>width$}", value.to_string(), width = order + 1)
}

pub fn sort_key(record: &SvRecord) -> String {
    let code = record.code();
    let code2 = record.code2().as_ref().unwrap_or(code);
    let others = record.others();
    let svtype: &'static str = record.svtype().into();

    [
        pad(code.rank(), CODE_ORDER),
        pad(code2.rank(), CODE_ORDER),
        pad(record.start(), START_ORDER),
        pad(record.len(), LEN_ORDER),
        others.side().to_string(),
        svtype.to_owned(),
    ]
    .concat()
}

pub fn format_record(record: &SvRecord) -> Result<String> {
    Ok(format!(
        "{}\t{}",
        sort_key(record),
        serde_json::to_string(record)?
    ))
}

/// Line-oriented sink for calls.
pub struct SvWriter {
    inner: BufWriter<Box<dyn Write>>,
}

impl SvWriter {
    pub fn new(inner: Box<dyn Write>) -> Self {
        SvWriter {
            inner: BufWriter::new(inner),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).with_context(|| {
            format!("Unable to write calls to {}.", path.as_ref().display())
        })?;
        Ok(SvWriter::new(Box::new(file)))
    }

    pub fn from_stdout() -> Self {
        SvWriter::new(Box::new(io::stdout()))
    }

    pub fn write(&mut self, record: &SvRecord) -> Result<()> {
        writeln!(self.inner, "{}", format_record(record)?)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::Side;
    use crate::calling::record::{Others, SvType};
    use crate::utils::genomics::ChromCode;

    fn deletion(start: u64, len: u64) -> SvRecord {
        SvRecord::intra_chromosomal(
            &ChromCode::from_name("chr1"),
            "chr1",
            start,
            len,
            SvType::Deletion,
            Others::new(Side::Left, 70),
        )
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(7, 2), "007");
        assert_eq!(pad(0, 2), "000");
        assert_eq!(pad(123, 2), "123");
        assert_eq!(pad(12345, 2), "12345");
        assert_eq!(pad("*", 9), "000000000*");
    }

    #[test]
    fn test_sort_key_deletion() {
        assert_eq!(
            sort_key(&deletion(100, 80)),
            "001001000000001000000000080LDEL"
        );
    }

    #[test]
    fn test_sort_key_translocation() {
        let record = SvRecord::translocation(
            &ChromCode::from_name("chr2"),
            "chr2",
            5000,
            &ChromCode::from_name("chrX"),
            "chrX",
            77,
            2,
            Others::new(Side::Right, 70),
        );
        assert_eq!(sort_key(&record), "00202300000005000000000000*RCTX");
    }

    #[test]
    fn test_sort_key_unplaced() {
        let record = SvRecord::insertion(
            &ChromCode::from_name("GL000192.1"),
            "GL000192.1",
            42,
            Others::new(Side::Left, 70),
        );
        assert_eq!(sort_key(&record), "00000000000000042000000000*LINS");
    }

    #[test]
    fn test_unplaced_contigs_share_textual_key() {
        let insertion = |rname: &str, start| {
            SvRecord::insertion(
                &ChromCode::from_name(rname),
                rname,
                start,
                Others::new(Side::Left, 70),
            )
        };
        let a = insertion("GL000193.1", 10);
        let b = insertion("GL000192.1", 20);
        // the textual key only knows the rank
        assert!(sort_key(&a) < sort_key(&b));
        // the structured key distinguishes the contigs
        assert!(a.sort_key() > b.sort_key());
    }

    #[test]
    fn test_sort_key_monotonic_in_start() {
        let starts = [9u64, 10, 99, 100, 12345, 999_999];
        let mut lines = starts
            .iter()
            .map(|&start| format_record(&deletion(start, 50)).unwrap())
            .collect::<Vec<_>>();
        lines.reverse();
        lines.sort();
        let sorted_starts = lines
            .iter()
            .map(|line| {
                let json: serde_json::Value =
                    serde_json::from_str(line.split('\t').nth(1).unwrap()).unwrap();
                json["start"].as_u64().unwrap()
            })
            .collect::<Vec<_>>();
        assert_eq!(sorted_starts, starts.to_vec());
    }

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(&deletion(100, 80)).unwrap(),
            "001001000000001000000000080LDEL\t\
             {\"rname\":\"chr1\",\"start\":100,\"end\":180,\"type\":\"DEL\",\"len\":80,\
             \"rname2\":\"=\",\"others\":{\"LR\":\"L\",\"size\":70}}"
        );
    }
}
