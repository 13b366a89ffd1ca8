// Copyright 2020 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Breakpoints encoded in the names of clipped read fragments.
//!
//! A clipped fragment carries the breakpoint that produced it in its read
//! name, as seven fields joined by `::`:
//!
//! ```text
//! name::LR::pos::cigar::rname::strand::size
//! ```
//!
//! e.g. `read17::L::1000::30M70S::chr1::+::70`.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use itertools::Itertools;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::errors;
use crate::utils::genomics::ChromCode;

pub const SEPARATOR: &str = "::";
pub const N_FIELDS: usize = 7;

/// Side of the original breakpoint a clipped fragment represents.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Side {
    #[strum(serialize = "L")]
    #[serde(rename = "L")]
    Left,
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    Right,
}

impl Side {
    pub fn is_left(self) -> bool {
        self == Side::Left
    }

    pub fn is_right(self) -> bool {
        self == Side::Right
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Strand {
    #[strum(serialize = "+")]
    #[serde(rename = "+")]
    Forward,
    #[strum(serialize = "-")]
    #[serde(rename = "-")]
    Reverse,
}

/// The breakpoint a clipped fragment originates from.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct BreakpointInfo {
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    side: Side,
    /// 1-based position of the breakpoint.
    #[getset(get_copy = "pub")]
    pos: u64,
    #[getset(get = "pub")]
    cigar: String,
    #[getset(get = "pub")]
    rname: String,
    #[getset(get_copy = "pub")]
    strand: Strand,
    #[getset(get_copy = "pub")]
    size: u64,
    #[getset(get = "pub")]
    code: ChromCode,
}

impl BreakpointInfo {
    pub fn new(
        name: &str,
        side: Side,
        pos: u64,
        cigar: &str,
        rname: &str,
        strand: Strand,
        size: u64,
    ) -> Self {
        BreakpointInfo {
            name: name.to_owned(),
            side,
            pos,
            cigar: cigar.to_owned(),
            rname: rname.to_owned(),
            strand,
            size,
            code: ChromCode::from_name(rname),
        }
    }

    /// Decode a breakpoint from a read name. Fields beyond the seventh are ignored.
    pub fn decode(text: &str) -> Result<Self> {
        let fields = text.split(SEPARATOR).take(N_FIELDS).collect_vec();
        if fields.len() < N_FIELDS {
            return Err(errors::invalid_breakpoint_name(
                text,
                &format!("expected {} fields, found {}", N_FIELDS, fields.len()),
            )
            .into());
        }

        let side = Side::from_str(fields[1])
            .map_err(|_| errors::invalid_breakpoint_name(text, "LR must be 'L' or 'R'"))?;
        let pos = fields[2]
            .parse::<u64>()
            .map_err(|_| errors::invalid_breakpoint_name(text, "pos is not a number"))?;
        let strand = Strand::from_str(fields[5])
            .map_err(|_| errors::invalid_breakpoint_name(text, "strand must be '+' or '-'"))?;
        let size = fields[6]
            .parse::<u64>()
            .map_err(|_| errors::invalid_breakpoint_name(text, "size is not a number"))?;

        Ok(BreakpointInfo::new(
            fields[0], side, pos, fields[3], fields[4], strand, size,
        ))
    }

    /// Encode into the read name representation. The code is never encoded.
    pub fn encode(&self) -> String {
        [
            self.name.clone(),
            self.side.to_string(),
            self.pos.to_string(),
            self.cigar.clone(),
            self.rname.clone(),
            self.strand.to_string(),
            self.size.to_string(),
        ]
        .join(SEPARATOR)
    }
}

impl FromStr for BreakpointInfo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        BreakpointInfo::decode(s)
    }
}

impl fmt::Display for BreakpointInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
