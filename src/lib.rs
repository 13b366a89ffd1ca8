// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Calling of structural variants from realigned clipped fragments.
//!
//! The fragments are expected to carry the breakpoint they were clipped at
//! in their read names (see [`breakpoints`]). Where a fragment realigns
//! determines the partner breakpoint and thereby the kind of variant
//! (see [`calling::classify`]).

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate getset;
#[macro_use]
extern crate derive_new;

pub mod breakpoints;
pub mod calling;
pub mod cli;
pub(crate) mod errors;
pub mod reference_name;
pub mod utils;

pub use crate::breakpoints::{BreakpointInfo, Side, Strand};
pub use crate::calling::{classify, Alignment, SvRecord, SvType};
pub use crate::reference_name::ReferenceName;
pub use crate::utils::genomics::ChromCode;
