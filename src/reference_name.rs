//! Composite reference names.
//!
//! Clipped fragments may be realigned against sub-sequences of the genome.
//! Such a sub-sequence is named `<contig>:<start>-<end>`, with `start` being
//! the 0-based genome-wide offset of its first base. A bare contig name has
//! offset 0.

use std::str::FromStr;

use anyhow::Result;
use regex::Regex;

use crate::errors;
use crate::utils::genomics::ChromCode;

lazy_static! {
    static ref REGION_RE: Regex =
        Regex::new(r"^(?P<contig>.+):(?P<start>\d+)-(?P<end>\d+)$").unwrap();
}

/// The locus a reference name refers to.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct ReferenceName {
    #[getset(get = "pub")]
    code: ChromCode,
    #[getset(get = "pub")]
    rname: String,
    /// Offset to add to in-sequence positions to get genome-wide coordinates.
    #[getset(get_copy = "pub")]
    start: u64,
}

impl ReferenceName {
    pub fn decode(name: &str) -> Result<Self> {
        if let Some(caps) = REGION_RE.captures(name) {
            let contig = &caps["contig"];
            let start: u64 = caps["start"]
                .parse()
                .map_err(|_| errors::invalid_reference_name(name, "start out of range"))?;
            let end: u64 = caps["end"]
                .parse()
                .map_err(|_| errors::invalid_reference_name(name, "end out of range"))?;
            if end < start {
                return Err(errors::invalid_reference_name(
                    name,
                    "region end lies before region start",
                )
                .into());
            }
            Ok(ReferenceName {
                code: ChromCode::from_name(contig),
                rname: contig.to_owned(),
                start,
            })
        } else {
            Ok(ReferenceName {
                code: ChromCode::from_name(name),
                rname: name.to_owned(),
                start: 0,
            })
        }
    }
}

impl FromStr for ReferenceName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ReferenceName::decode(s)
    }
}
