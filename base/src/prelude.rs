//! The prelude exports the value types used to drive the ALU and
//! display its outputs.
pub use super::binary::format_binary;
pub use super::error::ConversionFailed;
pub use super::word::{Unsigned2Bit, Unsigned3Bit};
pub use super::{u2, u3};
