use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub(crate) enum Error {
    #[error("invalid breakpoint-encoded read name {name}: {msg}")]
    InvalidBreakpointName { name: String, msg: String },
    #[error("invalid reference name {name}: {msg}")]
    InvalidReferenceName { name: String, msg: String },
    #[error("mapped alignment {qname} does not refer to a reference sequence")]
    MissingReferenceName { qname: String },
}

pub(crate) fn invalid_breakpoint_name(name: &str, msg: &str) -> Error {
    Error::InvalidBreakpointName {
        name: name.to_owned(),
        msg: msg.to_owned(),
    }
}

pub(crate) fn invalid_reference_name(name: &str, msg: &str) -> Error {
    Error::InvalidReferenceName {
        name: name.to_owned(),
        msg: msg.to_owned(),
    }
}
