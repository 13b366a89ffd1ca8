// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

use crate::calling::CallerBuilder;

#[derive(Debug, StructOpt, Clone)]
#[structopt(
    name = "clipsv",
    about = "Call structural variants (INS, DEL, DUP, INV, CTX) from realigned clipped \
             fragments whose read names encode the breakpoint they were clipped at. \
             Each call is printed as a sort key followed by a tab and the call in JSON format."
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub struct ClipSv {
    #[structopt(
        parse(from_os_str),
        help = "SAM/BAM/CRAM file with realigned clipped fragments. Read names have to \
                follow the format name::LR::pos::cigar::rname::strand::size."
    )]
    pub alignments: PathBuf,
    #[structopt(
        parse(from_os_str),
        long,
        short,
        help = "File that shall contain the calls (if omitted, write to STDOUT)."
    )]
    pub output: Option<PathBuf>,
    #[structopt(long, short, help = "Provide verbose output.")]
    pub verbose: bool,
}

pub fn run(opt: ClipSv) -> Result<()> {
    let caller = CallerBuilder::default()
        .alignments(opt.alignments)
        .output(opt.output)
        .build()?;
    caller.call()?;
    Ok(())
}
