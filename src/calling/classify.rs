//! Classification of a realigned clipped fragment into a structural variant.
//!
//! A clipped fragment was cut off at a known breakpoint (the origin, encoded
//! in its read name). Where the fragment realigns reveals the partner
//! breakpoint, i.e. the other end of the adjacency:
//!
//! * unmapped fragments indicate novel sequence (INS),
//! * a partner on another chromosome indicates a translocation (CTX),
//! * otherwise the relative order of both breakpoints, the clip side and the
//!   strand decide between DEL, DUP and INV.
//!
//! Translocations come in four junction layouts. For chromosomes A and C
//! (lower case denoting the reverse strand), with A having the smaller code:
//!
//! ```text
//! 1: AAAAAA|CCCCCC    2: AAAAAA|cccccc
//!    aaaaaa|cccccc       aaaaaa|CCCCCC
//!
//! 3: CCCCCC|AAAAAA    4: cccccc|AAAAAA
//!    cccccc|aaaaaa       CCCCCC|aaaaaa
//! ```

use anyhow::Result;

use crate::breakpoints::{BreakpointInfo, Side};
use crate::calling::record::{Others, SvRecord, SvType};
use crate::calling::Alignment;
use crate::errors;
use crate::reference_name::ReferenceName;
use crate::utils::genomics::ChromCode;
use crate::utils::xor;

/// One end of an adjacency, in genome-wide coordinates.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PartnerBreakpoint<'a> {
    pub code: &'a ChromCode,
    pub rname: &'a str,
    pub start: u64,
    pub side: Side,
}

/// Genome-wide position of the partner breakpoint.
///
/// Whether the near or the far end of the realigned fragment continues the
/// origin breakpoint depends on the clip side and the strand: for a left
/// clip on the forward strand (or a right clip on the reverse strand) it is
/// the far end.
pub fn partner_start(alignment: &Alignment, origin: &BreakpointInfo, locus: &ReferenceName) -> u64 {
    let local_start = alignment.pos().saturating_sub(1);
    if xor(origin.side().is_left(), alignment.reversed()) {
        locus.start() + local_start + alignment.clip_len()
    } else {
        locus.start() + local_start
    }
}

/// Order the two ends of a translocation by chromosome code, so that both
/// fragments of a junction yield the same call.
fn canonicalize<'a>(
    first: PartnerBreakpoint<'a>,
    second: PartnerBreakpoint<'a>,
) -> (PartnerBreakpoint<'a>, PartnerBreakpoint<'a>) {
    let mut pair = [first, second];
    pair.sort_by(|a, b| a.code.cmp(b.code));
    let [bp_a, bp_b] = pair;
    (bp_a, bp_b)
}

/// Call a structural variant from a realigned clipped fragment and the
/// breakpoint it was clipped at.
///
/// Returns `None` if the fragment maps back onto its own breakpoint.
pub fn classify(alignment: &Alignment, origin: &BreakpointInfo) -> Result<Option<SvRecord>> {
    if alignment.unmapped() {
        return Ok(Some(SvRecord::insertion(
            origin.code(),
            origin.rname(),
            origin.pos(),
            Others::new(origin.side(), origin.size()),
        )));
    }

    let rname = alignment
        .rname()
        .as_ref()
        .ok_or_else(|| errors::Error::MissingReferenceName {
            qname: origin.name().to_owned(),
        })?;
    let locus = ReferenceName::decode(rname)?;
    let partner_start = partner_start(alignment, origin, &locus);

    if locus.code() != origin.code() {
        let partner = PartnerBreakpoint::new(
            locus.code(),
            locus.rname(),
            partner_start,
            if xor(origin.side().is_right(), alignment.reversed()) {
                Side::Left
            } else {
                Side::Right
            },
        );
        let origin_bp =
            PartnerBreakpoint::new(origin.code(), origin.rname(), origin.pos(), origin.side());
        let (bp_a, bp_b) = canonicalize(origin_bp, partner);

        let mut subtype = if bp_a.side.is_right() { 1 } else { 3 };
        if alignment.reversed() {
            subtype += 1;
        }

        // marks which canonical end the call was observed from
        let side = if bp_a.code == origin.code() {
            Side::Left
        } else {
            Side::Right
        };

        return Ok(Some(SvRecord::translocation(
            bp_a.code,
            bp_a.rname,
            bp_a.start,
            bp_b.code,
            bp_b.rname,
            bp_b.start,
            subtype,
            Others::new(side, origin.size()),
        )));
    }

    if partner_start == origin.pos() {
        debug!(
            "fragment {} maps onto its own breakpoint, skipping",
            origin.name()
        );
        return Ok(None);
    }

    let start = partner_start.min(origin.pos());
    let len = partner_start.max(origin.pos()) - start;
    let is_dup = xor(origin.side().is_left(), origin.pos() > partner_start);

    let svtype = if alignment.reversed() {
        SvType::Inversion
    } else if is_dup {
        SvType::Duplication
    } else {
        SvType::Deletion
    };

    Ok(Some(SvRecord::intra_chromosomal(
        origin.code(),
        origin.rname(),
        start,
        len,
        svtype,
        Others::new(origin.side(), origin.size()),
    )))
}
