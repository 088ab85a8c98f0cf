use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use alu::{AluError, UnknownMnemonic};
use base::prelude::*;

#[derive(Debug)]
pub enum Fail {
    /// We were not able to correctly initialise the program.
    InitialisationFailure(String),
    /// The ALU rejected its inputs.
    Alu(AluError),
    /// An operation was named which the ALU does not have.
    UnknownOperation(UnknownMnemonic),
    /// A value could not be rendered in binary.
    Format(ConversionFailed),
    Json(serde_json::Error),
    Io(io::Error),
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::InitialisationFailure(msg) => f.write_str(msg.as_str()),
            Fail::Alu(e) => e.fmt(f),
            Fail::UnknownOperation(e) => e.fmt(f),
            Fail::Format(e) => write!(f, "cannot format value: {e}"),
            Fail::Json(e) => write!(f, "cannot generate JSON: {e}"),
            Fail::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for Fail {}

impl From<AluError> for Fail {
    fn from(e: AluError) -> Fail {
        Fail::Alu(e)
    }
}

impl From<UnknownMnemonic> for Fail {
    fn from(e: UnknownMnemonic) -> Fail {
        Fail::UnknownOperation(e)
    }
}

impl From<ConversionFailed> for Fail {
    fn from(e: ConversionFailed) -> Fail {
        Fail::Format(e)
    }
}

impl From<serde_json::Error> for Fail {
    fn from(e: serde_json::Error) -> Fail {
        Fail::Json(e)
    }
}

impl From<io::Error> for Fail {
    fn from(e: io::Error) -> Fail {
        Fail::Io(e)
    }
}
