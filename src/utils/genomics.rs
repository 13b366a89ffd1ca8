//! genomics.rs
//!
//! Chromosome identity shared by breakpoint names and reference names.

use std::fmt;

/// Rank given to contigs outside of the human primary assembly.
pub const UNPLACED_RANK: u32 = 0;

/// Strip "chr" prefix, so both "chr1" and "1" normalize to "1".
pub(crate) fn normalize_chrom(chrom: &str) -> String {
    chrom.trim_start_matches("chr").to_string()
}

/// Convert chromosome name to a sortable rank (natural human order).
/// Chromosomes 1-22, X, Y and M/MT are ranked, everything else is `None`.
pub(crate) fn chrom_rank_checked(chrom: &str) -> Option<u32> {
    let s = normalize_chrom(chrom);
    match s.parse::<u32>() {
        Ok(n @ 1..=22) => Some(n),
        Ok(_) => None,
        Err(_) => match s.as_str() {
            "X" => Some(23),
            "Y" => Some(24),
            "M" | "MT" => Some(25),
            _ => None,
        },
    }
}

/// Ordinal identity of a chromosome.
///
/// Codes are ordered by rank first and by normalized name second. Two names
/// denote the same chromosome iff their codes are equal, which makes the
/// order total over all contig names, including unplaced ones (which share
/// rank 0 and are told apart by name).
///
/// This is the only place where codes are derived. Breakpoint-encoded read
/// names and reference names both go through [`ChromCode::from_name`], so
/// codes from either source are comparable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct ChromCode {
    #[getset(get_copy = "pub")]
    rank: u32,
    #[getset(get = "pub")]
    name: String,
}

impl ChromCode {
    pub fn from_name(chrom: &str) -> Self {
        ChromCode {
            rank: chrom_rank_checked(chrom).unwrap_or(UNPLACED_RANK),
            name: normalize_chrom(chrom),
        }
    }

    pub fn is_placed(&self) -> bool {
        self.rank != UNPLACED_RANK
    }
}

impl fmt::Display for ChromCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}
