//! Why a native integer could not become an operand or selector.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Raised by the `TryFrom` conversions into [`crate::Unsigned2Bit`]
/// and [`crate::Unsigned3Bit`], and by
/// [`crate::binary::format_binary`] when a value needs more binary
/// digits than the field it is printed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionFailed {
    /// Some bit above the word's width is set (for example 4 as a
    /// 2-bit operand).
    TooLarge,
    /// Operands and selectors are unsigned.
    TooSmall,
}

impl Error for ConversionFailed {}

impl Display for ConversionFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            ConversionFailed::TooLarge => "value has bits set beyond the width of the word",
            ConversionFailed::TooSmall => "negative values cannot be held in an unsigned word",
        })
    }
}
