use std::fmt;

use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::breakpoints::Side;
use crate::utils::genomics::ChromCode;

/// Value of `rname2` for calls within a single chromosome.
pub const SAME_CHROM: &str = "=";

// Variants are declared in the lexicographic order of their names, so that
// the derived ordering agrees with the sort key.
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
    EnumIter,
    IntoStaticStr,
    Serialize,
)]
pub enum SvType {
    #[strum(serialize = "CTX")]
    #[serde(rename = "CTX")]
    Translocation,
    #[strum(serialize = "DEL")]
    #[serde(rename = "DEL")]
    Deletion,
    #[strum(serialize = "DUP")]
    #[serde(rename = "DUP")]
    Duplication,
    #[strum(serialize = "INS")]
    #[serde(rename = "INS")]
    Insertion,
    #[strum(serialize = "INV")]
    #[serde(rename = "INV")]
    Inversion,
}

/// Length of a call. Insertions and translocations have no length (`*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SvLen {
    Undefined,
    Bases(u64),
}

impl SvLen {
    pub fn bases(self) -> Option<u64> {
        match self {
            SvLen::Bases(len) => Some(len),
            SvLen::Undefined => None,
        }
    }
}

impl fmt::Display for SvLen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SvLen::Bases(len) => write!(f, "{}", len),
            SvLen::Undefined => f.write_str("*"),
        }
    }
}

impl Serialize for SvLen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SvLen::Bases(len) => serializer.serialize_u64(*len),
            SvLen::Undefined => serializer.serialize_str("*"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, new, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Others {
    /// For translocations, the canonical side the call was observed from.
    #[serde(rename = "LR")]
    side: Side,
    size: u64,
}

/// A structural variant call derived from a single clipped fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, CopyGetters)]
pub struct SvRecord {
    #[serde(skip)]
    #[getset(get = "pub")]
    code: ChromCode,
    #[serde(skip)]
    #[getset(get = "pub")]
    code2: Option<ChromCode>,
    #[getset(get = "pub")]
    rname: String,
    #[getset(get_copy = "pub")]
    start: u64,
    #[getset(get_copy = "pub")]
    end: u64,
    #[serde(rename = "type")]
    #[getset(get_copy = "pub")]
    svtype: SvType,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[getset(get_copy = "pub")]
    subtype: Option<u8>,
    #[getset(get_copy = "pub")]
    len: SvLen,
    #[getset(get = "pub")]
    rname2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[getset(get_copy = "pub")]
    start2: Option<u64>,
    #[getset(get = "pub")]
    others: Others,
}

impl SvRecord {
    /// A single point insertion at `start`.
    pub(crate) fn insertion(code: &ChromCode, rname: &str, start: u64, others: Others) -> Self {
        SvRecord {
            code: code.clone(),
            code2: None,
            rname: rname.to_owned(),
            start,
            end: start + 1,
            svtype: SvType::Insertion,
            subtype: None,
            len: SvLen::Undefined,
            rname2: SAME_CHROM.to_owned(),
            start2: None,
            others,
        }
    }

    /// A deletion, duplication or inversion spanning `start..start + len`.
    pub(crate) fn intra_chromosomal(
        code: &ChromCode,
        rname: &str,
        start: u64,
        len: u64,
        svtype: SvType,
        others: Others,
    ) -> Self {
        SvRecord {
            code: code.clone(),
            code2: None,
            rname: rname.to_owned(),
            start,
            end: start + len,
            svtype,
            subtype: None,
            len: SvLen::Bases(len),
            rname2: SAME_CHROM.to_owned(),
            start2: None,
            others,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn translocation(
        code: &ChromCode,
        rname: &str,
        start: u64,
        code2: &ChromCode,
        rname2: &str,
        start2: u64,
        subtype: u8,
        others: Others,
    ) -> Self {
        SvRecord {
            code: code.clone(),
            code2: Some(code2.clone()),
            rname: rname.to_owned(),
            start,
            end: start + 1,
            svtype: SvType::Translocation,
            subtype: Some(subtype),
            len: SvLen::Undefined,
            rname2: rname2.to_owned(),
            start2: Some(start2),
            others,
        }
    }

    pub fn is_intra_chromosomal(&self) -> bool {
        self.code2.is_none()
    }

    /// Structured counterpart of the textual sort key, without its width limits.
    pub fn sort_key(&self) -> (&ChromCode, &ChromCode, u64, SvLen, Side, SvType) {
        (
            &self.code,
            self.code2.as_ref().unwrap_or(&self.code),
            self.start,
            self.len,
            self.others.side(),
            self.svtype,
        )
    }
}
