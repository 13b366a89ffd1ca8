// Copyright 2020 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

pub mod caller;
pub mod classify;
pub mod output;
pub mod record;

use std::str;

use anyhow::Result;
use rust_htslib::bam;

use crate::errors;

pub use caller::{Caller, CallerBuilder};
pub use classify::classify;
pub use record::{Others, SvLen, SvRecord, SvType};

/// The properties of a realigned clipped fragment that matter for calling.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, new)]
pub struct Alignment {
    #[getset(get_copy = "pub")]
    reversed: bool,
    #[getset(get_copy = "pub")]
    unmapped: bool,
    /// Composite reference name, `None` for records without a target.
    #[getset(get = "pub")]
    rname: Option<String>,
    /// 1-based leftmost mapping position.
    #[getset(get_copy = "pub")]
    pos: u64,
    /// Number of reference bases covered by the alignment.
    #[getset(get_copy = "pub")]
    clip_len: u64,
}

impl Alignment {
    pub fn from_record(record: &bam::Record, header: &bam::HeaderView) -> Result<Self> {
        let rname = if record.tid() >= 0 {
            Some(str::from_utf8(header.tid2name(record.tid() as u32))?.to_owned())
        } else {
            None
        };
        if !record.is_unmapped() && rname.is_none() {
            return Err(errors::Error::MissingReferenceName {
                qname: String::from_utf8_lossy(record.qname()).into_owned(),
            }
            .into());
        }

        let (pos, clip_len) = if record.pos() >= 0 {
            let end_pos = record.cigar().end_pos();
            (record.pos() as u64 + 1, (end_pos - record.pos()).max(0) as u64)
        } else {
            (0, 0)
        };

        Ok(Alignment {
            reversed: record.is_reverse(),
            unmapped: record.is_unmapped(),
            rname,
            pos,
            clip_len,
        })
    }
}
